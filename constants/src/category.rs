use bevy::prelude::*;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// Athlete skill tiers as they appear in the dataset JSON.
///
/// Anything the dataset reports that is not a known tier collapses to
/// `Beginner`, so a malformed record still renders with the default palette
/// entry instead of failing the load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Category {
    Elite,
    Intermediate,
    #[default]
    Beginner,
}

pub struct CategoryInfo {
    pub category: Category,
    pub name: &'static str,
    /// Palette color as linear-ish sRGB components.
    pub color: (f32, f32, f32),
}

/// Fixed palette: amber for elite, cyan for intermediate, teal for beginner.
pub const CATEGORY_MAP: &[CategoryInfo] = &[
    CategoryInfo {
        category: Category::Elite,
        name: "Elite",
        color: (1.0, 0.72, 0.30),
    },
    CategoryInfo {
        category: Category::Intermediate,
        name: "Intermediate",
        color: (0.27, 0.93, 1.0),
    },
    CategoryInfo {
        category: Category::Beginner,
        name: "Beginner",
        color: (0.30, 0.84, 0.70),
    },
];

impl Category {
    pub fn from_string(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "elite" => Some(Self::Elite),
            "intermediate" => Some(Self::Intermediate),
            "beginner" => Some(Self::Beginner),
            _ => None,
        }
    }

    fn info(&self) -> &'static CategoryInfo {
        CATEGORY_MAP
            .iter()
            .find(|c| c.category == *self)
            .unwrap_or(&CATEGORY_MAP[2])
    }

    pub fn display_name(&self) -> &'static str {
        self.info().name
    }

    pub fn color(&self) -> Color {
        let (r, g, b) = self.info().color;
        Color::srgb(r, g, b)
    }
}

// Custom impl so unknown category strings fall back rather than erroring.
impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CategoryVisitor;

        impl de::Visitor<'_> for CategoryVisitor {
            type Value = Category;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a category name string")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Category, E> {
                Ok(Category::from_string(v).unwrap_or_default())
            }
        }

        deserializer.deserialize_str(CategoryVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_categories_parse() {
        assert_eq!(Category::from_string("Elite"), Some(Category::Elite));
        assert_eq!(
            Category::from_string("intermediate"),
            Some(Category::Intermediate)
        );
        assert_eq!(Category::from_string("BEGINNER"), Some(Category::Beginner));
    }

    #[test]
    fn unknown_category_deserializes_to_beginner() {
        let parsed: Category = serde_json::from_str("\"Legend\"").unwrap();
        assert_eq!(parsed, Category::Beginner);
    }

    #[test]
    fn category_round_trips_through_json() {
        let json = serde_json::to_string(&Category::Elite).unwrap();
        assert_eq!(json, "\"Elite\"");
        let parsed: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Category::Elite);
    }

    #[test]
    fn every_category_has_a_palette_entry() {
        for cat in [Category::Elite, Category::Intermediate, Category::Beginner] {
            assert_eq!(cat.info().category, cat);
            assert!(!cat.display_name().is_empty());
        }
    }
}
