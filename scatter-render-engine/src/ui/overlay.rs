use bevy::prelude::*;
use constants::category::CATEGORY_MAP;

use crate::engine::assets::athlete::AthleteRoster;
use crate::tools::search::SearchState;

// Components
#[derive(Component)]
pub struct OverlayRoot;
#[derive(Component)]
pub struct NodeCounterText;
#[derive(Component)]
pub struct SearchBox;
#[derive(Component)]
pub struct SearchText;

const SEARCH_PLACEHOLDER: &str = "SEARCH ATHLETE...";

// Spawns the full-viewport overlay: header block, counter + search box on
// the right, legend and hint at the bottom left.
pub fn spawn_overlay(commands: &mut Commands) {
    commands
        .spawn((
            OverlayRoot,
            Name::new("Overlay"),
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                top: Val::Px(0.0),
                padding: UiRect::all(Val::Px(24.0)),
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::SpaceBetween,
                ..default()
            },
        ))
        .with_children(|parent| {
            // Header row: title on the left, counter block on the right.
            parent
                .spawn((
                    Name::new("HeaderRow"),
                    Node {
                        width: Val::Percent(100.0),
                        display: Display::Flex,
                        justify_content: JustifyContent::SpaceBetween,
                        align_items: AlignItems::FlexStart,
                        ..default()
                    },
                ))
                .with_children(|row| {
                    row.spawn((
                        Name::new("Title"),
                        Node {
                            display: Display::Flex,
                            flex_direction: FlexDirection::Column,
                            ..default()
                        },
                    ))
                    .with_children(|title| {
                        title.spawn((
                            Text::new("WEIGHTLESS DATA"),
                            TextFont {
                                font_size: 42.0,
                                ..default()
                            },
                            TextColor(Color::WHITE),
                        ));
                        title.spawn((
                            Text::new("INTERACTIVE 3D VISUALIZATION"),
                            TextFont {
                                font_size: 13.0,
                                ..default()
                            },
                            TextColor(Color::srgba(1.0, 1.0, 1.0, 0.6)),
                        ));
                    });

                    row.spawn((
                        Name::new("CounterBlock"),
                        Node {
                            display: Display::Flex,
                            flex_direction: FlexDirection::Column,
                            align_items: AlignItems::FlexEnd,
                            row_gap: Val::Px(4.0),
                            ..default()
                        },
                    ))
                    .with_children(|block| {
                        block.spawn((
                            NodeCounterText,
                            Text::new("000"),
                            TextFont {
                                font_size: 26.0,
                                ..default()
                            },
                            TextColor(Color::WHITE),
                        ));
                        block.spawn((
                            Text::new("ACTIVE NODES"),
                            TextFont {
                                font_size: 12.0,
                                ..default()
                            },
                            TextColor(Color::srgba(1.0, 1.0, 1.0, 0.5)),
                        ));

                        block
                            .spawn((
                                SearchBox,
                                Name::new("SearchBox"),
                                Button,
                                BackgroundColor(Color::srgba(1.0, 1.0, 1.0, 0.06)),
                                BorderColor(Color::srgba(1.0, 1.0, 1.0, 0.25)),
                                Node {
                                    width: Val::Px(220.0),
                                    height: Val::Px(32.0),
                                    margin: UiRect::top(Val::Px(10.0)),
                                    padding: UiRect::axes(Val::Px(10.0), Val::Px(6.0)),
                                    display: Display::Flex,
                                    align_items: AlignItems::Center,
                                    border: UiRect::all(Val::Px(1.0)),
                                    ..default()
                                },
                            ))
                            .with_children(|search| {
                                search.spawn((
                                    SearchText,
                                    Text::new(SEARCH_PLACEHOLDER),
                                    TextFont {
                                        font_size: 13.0,
                                        ..default()
                                    },
                                    TextColor(Color::srgba(1.0, 1.0, 1.0, 0.5)),
                                ));
                            });
                    });
                });

            // Legend: one row per category plus the usage hint.
            parent
                .spawn((
                    Name::new("Legend"),
                    Node {
                        display: Display::Flex,
                        flex_direction: FlexDirection::Column,
                        row_gap: Val::Px(6.0),
                        max_width: Val::Px(300.0),
                        ..default()
                    },
                ))
                .with_children(|legend| {
                    for info in CATEGORY_MAP {
                        legend
                            .spawn((Node {
                                display: Display::Flex,
                                align_items: AlignItems::Center,
                                column_gap: Val::Px(8.0),
                                ..default()
                            },))
                            .with_children(|row| {
                                row.spawn((
                                    BackgroundColor(info.category.color()),
                                    Node {
                                        width: Val::Px(10.0),
                                        height: Val::Px(10.0),
                                        ..default()
                                    },
                                ));
                                row.spawn((
                                    Text::new(info.name),
                                    TextFont {
                                        font_size: 13.0,
                                        ..default()
                                    },
                                    TextColor(Color::srgba(1.0, 1.0, 1.0, 0.8)),
                                ));
                            });
                    }

                    legend.spawn((
                        Text::new(
                            "Hover over nodes to inspect values. \
                             Height represents relative strength score.",
                        ),
                        TextFont {
                            font_size: 12.0,
                            ..default()
                        },
                        TextColor(Color::srgba(1.0, 1.0, 1.0, 0.4)),
                        Node {
                            margin: UiRect::top(Val::Px(8.0)),
                            ..default()
                        },
                    ));
                });
        });
}

/// Keep the counter in sync with the dataset length.
pub fn update_node_counter(
    roster: Res<AthleteRoster>,
    mut query: Query<&mut Text, With<NodeCounterText>>,
) {
    if !roster.is_changed() {
        return;
    }
    for mut text in &mut query {
        text.0 = format_node_count(roster.len());
    }
}

pub fn format_node_count(len: usize) -> String {
    format!("{len:03}")
}

/// Reflect the live term and focus state into the search box.
pub fn reflect_search_box(
    search: Res<SearchState>,
    mut texts: Query<(&mut Text, &mut TextColor), With<SearchText>>,
    mut borders: Query<&mut BorderColor, With<SearchBox>>,
) {
    if !search.is_changed() {
        return;
    }

    let label = search_box_label(&search.term, search.focused);
    let color = if search.term.is_empty() && !search.focused {
        Color::srgba(1.0, 1.0, 1.0, 0.5)
    } else {
        Color::WHITE
    };
    for (mut text, mut text_color) in &mut texts {
        if text.0 != label {
            text.0 = label.clone();
        }
        *text_color = TextColor(color);
    }

    for mut border in &mut borders {
        *border = BorderColor(if search.focused {
            Color::srgba(1.0, 1.0, 1.0, 0.8)
        } else {
            Color::srgba(1.0, 1.0, 1.0, 0.25)
        });
    }
}

pub fn search_box_label(term: &str, focused: bool) -> String {
    if term.is_empty() && !focused {
        SEARCH_PLACEHOLDER.to_string()
    } else if focused {
        format!("{term}_")
    } else {
        term.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_is_zero_padded_to_three_digits() {
        assert_eq!(format_node_count(0), "000");
        assert_eq!(format_node_count(7), "007");
        assert_eq!(format_node_count(50), "050");
        assert_eq!(format_node_count(1234), "1234");
    }

    #[test]
    fn search_label_shows_placeholder_when_idle() {
        assert_eq!(search_box_label("", false), SEARCH_PLACEHOLDER);
    }

    #[test]
    fn search_label_shows_caret_while_focused() {
        assert_eq!(search_box_label("", true), "_");
        assert_eq!(search_box_label("ath", true), "ath_");
        assert_eq!(search_box_label("ath", false), "ath");
    }
}
