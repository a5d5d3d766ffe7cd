use constants::category::Category;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

/// One generated athlete, already projected into scene coordinates.
///
/// Serializes to the exact shape the render engine loads:
/// pullups spread along X, muscleups along Z, strength score normalized
/// into the [0, 1] value driving node height.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Athlete {
    pub id: u32,
    pub label: String,
    pub value: f32,
    pub raw_value: f32,
    pub category: Category,
    pub stats: AthleteStats,
    pub position: [f32; 3],
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AthleteStats {
    pub pullups: u32,
    pub muscleups: u32,
}

const PULLUP_RANGE: std::ops::Range<u32> = 5..45;
const MUSCLEUP_RANGE: std::ops::Range<u32> = 0..15;
const SCORE_RANGE: std::ops::Range<f64> = 10.0..100.0;

/// Generate a reproducible dataset for a given seed.
pub fn generate_athletes(count: usize, seed: u64) -> Vec<Athlete> {
    let mut rng = StdRng::seed_from_u64(seed);

    (1..=count as u32)
        .map(|id| {
            let pullups = rng.gen_range(PULLUP_RANGE);
            let muscleups = rng.gen_range(MUSCLEUP_RANGE);
            let score = rng.gen_range(SCORE_RANGE);
            let category = random_category(&mut rng);

            Athlete {
                id,
                label: format!("Athlete_{id}"),
                value: normalized_value(score),
                raw_value: rounded_score(score),
                category,
                stats: AthleteStats { pullups, muscleups },
                position: [project_x(pullups), 0.0, project_z(muscleups)],
            }
        })
        .collect()
}

fn random_category(rng: &mut StdRng) -> Category {
    match rng.gen_range(0..3) {
        0 => Category::Beginner,
        1 => Category::Intermediate,
        _ => Category::Elite,
    }
}

/// X axis: pullups centred around 25, spread factor 1.5.
pub fn project_x(pullups: u32) -> f32 {
    (pullups as f32 - 25.0) * 1.5
}

/// Z axis: muscleups centred around 7.5, spread factor 4 over the smaller range.
pub fn project_z(muscleups: u32) -> f32 {
    (muscleups as f32 - 7.5) * 4.0
}

/// Strength score 10..100 normalized to [0, 1].
pub fn normalized_value(score: f64) -> f32 {
    ((score - 10.0) / 90.0) as f32
}

fn rounded_score(score: f64) -> f32 {
    ((score * 10.0).round() / 10.0) as f32
}
