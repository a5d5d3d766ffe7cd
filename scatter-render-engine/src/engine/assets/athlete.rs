use bevy::prelude::*;
use constants::category::Category;
use serde::Deserialize;

/// One data point of the scatter dataset, as delivered by the pipeline JSON.
/// Immutable after load; systems only ever read it.
#[derive(Debug, Clone, Deserialize)]
pub struct AthleteData {
    pub id: u32,
    pub label: String,
    /// Normalized strength score in [0, 1], drives node height.
    pub value: f32,
    #[serde(default)]
    pub raw_value: f32,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub stats: AthleteStats,
    /// Scatter position; y is a placeholder, height comes from `value`.
    pub position: [f32; 3],
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct AthleteStats {
    #[serde(default)]
    pub pullups: u32,
    #[serde(default)]
    pub muscleups: u32,
}

/// The dataset JSON asset: a bare array of athletes.
#[derive(Debug, Clone, Deserialize, Asset, TypePath)]
#[serde(transparent)]
pub struct AthleteDataSet(pub Vec<AthleteData>);

/// Loaded dataset, owned at the top level and read by the scene and the
/// overlay (node counter, search, tooltip).
#[derive(Resource, Default)]
pub struct AthleteRoster {
    pub athletes: Vec<AthleteData>,
}

impl AthleteRoster {
    pub fn len(&self) -> usize {
        self.athletes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.athletes.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&AthleteData> {
        self.athletes.iter().find(|a| a.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_parses_pipeline_json() {
        let json = r#"[{
            "id": 1,
            "label": "Athlete_1",
            "value": 0.62,
            "raw_value": 65.8,
            "category": "Elite",
            "stats": { "pullups": 33, "muscleups": 4 },
            "position": [12.0, 0, -14.0]
        }]"#;

        let set: AthleteDataSet = serde_json::from_str(json).unwrap();
        assert_eq!(set.0.len(), 1);
        let a = &set.0[0];
        assert_eq!(a.id, 1);
        assert_eq!(a.category, Category::Elite);
        assert_eq!(a.stats.pullups, 33);
        assert_eq!(a.position[1], 0.0);
    }

    #[test]
    fn missing_category_and_stats_fall_back_to_defaults() {
        let json = r#"[{
            "id": 2,
            "label": "Athlete_2",
            "value": 0.1,
            "position": [0, 0, 0]
        }]"#;

        let set: AthleteDataSet = serde_json::from_str(json).unwrap();
        let a = &set.0[0];
        assert_eq!(a.category, Category::Beginner);
        assert_eq!(a.stats.pullups, 0);
        assert_eq!(a.stats.muscleups, 0);
        assert_eq!(a.raw_value, 0.0);
    }

    #[test]
    fn unknown_category_string_falls_back_to_beginner() {
        let json = r#"[{
            "id": 3,
            "label": "Athlete_3",
            "value": 0.9,
            "category": "Mythic",
            "position": [1, 0, 1]
        }]"#;

        let set: AthleteDataSet = serde_json::from_str(json).unwrap();
        assert_eq!(set.0[0].category, Category::Beginner);
    }

    #[test]
    fn roster_lookup_by_id() {
        let mut roster = AthleteRoster::default();
        roster.athletes.push(AthleteData {
            id: 9,
            label: "Athlete_9".into(),
            value: 0.5,
            raw_value: 55.0,
            category: Category::Intermediate,
            stats: AthleteStats::default(),
            position: [0.0, 0.0, 0.0],
        });

        assert_eq!(roster.len(), 1);
        assert!(roster.get(9).is_some());
        assert!(roster.get(10).is_none());
    }
}
