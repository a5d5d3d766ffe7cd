use bevy::input::ButtonState;
use bevy::input::keyboard::{Key, KeyboardInput};
use bevy::prelude::*;

use crate::engine::assets::athlete::{AthleteData, AthleteRoster};
use crate::engine::picking::SelectionState;
use crate::ui::overlay::SearchBox;

/// Live search term and whether the box currently eats keyboard input.
#[derive(Resource, Default)]
pub struct SearchState {
    pub term: String,
    pub focused: bool,
}

/// Click the search box to focus it; click anywhere else to blur.
pub fn search_box_focus(
    mouse_button: Res<ButtonInput<MouseButton>>,
    boxes: Query<&Interaction, With<SearchBox>>,
    mut search: ResMut<SearchState>,
) {
    if !mouse_button.just_pressed(MouseButton::Left) {
        return;
    }

    let over_box = boxes
        .iter()
        .any(|interaction| *interaction != Interaction::None);
    if over_box != search.focused {
        search.focused = over_box;
    }
}

/// Keyboard editing of the search term while the box is focused.
pub fn search_text_entry(
    mut events: EventReader<KeyboardInput>,
    mut search: ResMut<SearchState>,
) {
    if !search.focused {
        events.clear();
        return;
    }

    for event in events.read() {
        if event.state == ButtonState::Released {
            continue;
        }
        match &event.logical_key {
            Key::Character(text) => {
                for ch in text.chars().filter(|c| !c.is_control()) {
                    search.term.push(ch);
                }
            }
            Key::Space => search.term.push(' '),
            Key::Backspace => {
                search.term.pop();
            }
            Key::Escape => search.focused = false,
            _ => {}
        }
    }
}

/// Recompute the derived highlight whenever the term or the dataset
/// changes: first case-insensitive substring match against the labels.
pub fn update_highlight(
    search: Res<SearchState>,
    roster: Res<AthleteRoster>,
    mut selection: ResMut<SelectionState>,
) {
    if !search.is_changed() && !roster.is_changed() {
        return;
    }

    let highlighted = find_match(&search.term, &roster.athletes).map(|a| a.id);
    if selection.highlighted != highlighted {
        selection.highlighted = highlighted;
    }
}

pub fn find_match<'a>(term: &str, athletes: &'a [AthleteData]) -> Option<&'a AthleteData> {
    if term.is_empty() {
        return None;
    }
    let needle = term.to_lowercase();
    athletes
        .iter()
        .find(|athlete| athlete.label.to_lowercase().contains(&needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use constants::category::Category;

    fn roster() -> Vec<AthleteData> {
        ["Athlete_1", "Athlete_12", "Champion_3"]
            .iter()
            .enumerate()
            .map(|(i, label)| AthleteData {
                id: i as u32 + 1,
                label: (*label).into(),
                value: 0.5,
                raw_value: 55.0,
                category: Category::Beginner,
                stats: Default::default(),
                position: [0.0, 0.0, 0.0],
            })
            .collect()
    }

    #[test]
    fn empty_term_matches_nothing() {
        assert!(find_match("", &roster()).is_none());
    }

    #[test]
    fn match_is_case_insensitive_substring() {
        let athletes = roster();
        assert_eq!(find_match("champ", &athletes).unwrap().id, 3);
        assert_eq!(find_match("ATHLETE", &athletes).unwrap().id, 1);
    }

    #[test]
    fn first_match_wins() {
        let athletes = roster();
        // "_1" is a substring of both Athlete_1 and Athlete_12.
        assert_eq!(find_match("_1", &athletes).unwrap().id, 1);
    }

    #[test]
    fn no_match_yields_no_highlight() {
        assert!(find_match("nobody", &roster()).is_none());
    }
}
