use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::engine::assets::athlete::AthleteRoster;
use crate::engine::picking::SelectionState;

// Components
#[derive(Component)]
pub struct TooltipRoot;
#[derive(Component)]
pub struct TooltipLabel;
#[derive(Component)]
pub struct TooltipCategory;
#[derive(Component)]
pub struct TooltipValue;
#[derive(Component)]
pub struct TooltipStats;

const TOOLTIP_WIDTH: f32 = 240.0;
const TOOLTIP_HEIGHT: f32 = 120.0;
const CURSOR_OFFSET: f32 = 18.0;

// Spawns the tooltip panel, hidden until a node is hovered or highlighted.
pub fn spawn_tooltip(commands: &mut Commands) {
    commands
        .spawn((
            TooltipRoot,
            Name::new("Tooltip"),
            BackgroundColor(Color::srgba(0.06, 0.06, 0.08, 0.92)),
            BorderColor(Color::srgba(1.0, 1.0, 1.0, 0.2)),
            Node {
                width: Val::Px(TOOLTIP_WIDTH),
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                top: Val::Px(0.0),
                padding: UiRect::all(Val::Px(12.0)),
                display: Display::None,
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(4.0),
                border: UiRect::all(Val::Px(1.0)),
                ..default()
            },
        ))
        .with_children(|tooltip| {
            tooltip.spawn((
                TooltipLabel,
                Text::new(""),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
            tooltip.spawn((
                TooltipCategory,
                Text::new(""),
                TextFont {
                    font_size: 13.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
            tooltip.spawn((
                TooltipValue,
                Text::new(""),
                TextFont {
                    font_size: 13.0,
                    ..default()
                },
                TextColor(Color::srgba(1.0, 1.0, 1.0, 0.8)),
            ));
            tooltip.spawn((
                TooltipStats,
                Text::new(""),
                TextFont {
                    font_size: 13.0,
                    ..default()
                },
                TextColor(Color::srgba(1.0, 1.0, 1.0, 0.8)),
            ));
        });
}

/// Show the inspected athlete next to the cursor; hide the panel when
/// nothing is hovered or highlighted.
pub fn update_tooltip(
    selection: Res<SelectionState>,
    roster: Res<AthleteRoster>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut root: Query<&mut Node, With<TooltipRoot>>,
    mut texts: ParamSet<(
        Query<&mut Text, With<TooltipLabel>>,
        Query<(&mut Text, &mut TextColor), With<TooltipCategory>>,
        Query<&mut Text, With<TooltipValue>>,
        Query<&mut Text, With<TooltipStats>>,
    )>,
) {
    let Ok(mut node) = root.single_mut() else {
        return;
    };

    let Some(athlete) = selection.inspected().and_then(|id| roster.get(id)) else {
        if node.display != Display::None {
            node.display = Display::None;
        }
        return;
    };

    node.display = Display::Flex;
    if let Ok(window) = windows.single() {
        let (x, y) = tooltip_position(window.cursor_position(), window.width(), window.height());
        node.left = Val::Px(x);
        node.top = Val::Px(y);
    }

    if let Ok(mut text) = texts.p0().single_mut() {
        if text.0 != athlete.label {
            text.0 = athlete.label.clone();
        }
    }
    if let Ok((mut text, mut color)) = texts.p1().single_mut() {
        text.0 = athlete.category.display_name().to_string();
        *color = TextColor(athlete.category.color());
    }
    if let Ok(mut text) = texts.p2().single_mut() {
        text.0 = format!("Strength score: {:.1}", athlete.raw_value);
    }
    if let Ok(mut text) = texts.p3().single_mut() {
        text.0 = format!(
            "Pullups: {}   Muscleups: {}",
            athlete.stats.pullups, athlete.stats.muscleups
        );
    }
}

/// Panel position: offset from the cursor, clamped inside the window. With
/// no cursor (search highlight while the pointer is outside), park the
/// panel under the counter block.
pub fn tooltip_position(cursor: Option<Vec2>, width: f32, height: f32) -> (f32, f32) {
    match cursor {
        Some(pos) => (
            (pos.x + CURSOR_OFFSET).clamp(0.0, (width - TOOLTIP_WIDTH).max(0.0)),
            (pos.y + CURSOR_OFFSET).clamp(0.0, (height - TOOLTIP_HEIGHT).max(0.0)),
        ),
        None => ((width - TOOLTIP_WIDTH - 24.0).max(0.0), 130.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tooltip_follows_cursor_with_offset() {
        let (x, y) = tooltip_position(Some(Vec2::new(100.0, 200.0)), 1280.0, 720.0);
        assert_eq!((x, y), (118.0, 218.0));
    }

    #[test]
    fn tooltip_clamps_to_window_edges() {
        let (x, y) = tooltip_position(Some(Vec2::new(1270.0, 710.0)), 1280.0, 720.0);
        assert_eq!(x, 1280.0 - TOOLTIP_WIDTH);
        assert_eq!(y, 720.0 - TOOLTIP_HEIGHT);
    }

    #[test]
    fn tooltip_parks_under_counter_without_a_cursor() {
        let (x, y) = tooltip_position(None, 1280.0, 720.0);
        assert_eq!((x, y), (1280.0 - TOOLTIP_WIDTH - 24.0, 130.0));
    }
}
