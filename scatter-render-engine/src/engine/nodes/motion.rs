//! Per-frame target derivation for athlete nodes.
//!
//! Pure vector math, kept free of ECS types so the magnet behaviour is
//! testable headless: floating bob, ray-proximity attraction and the
//! exponential smoothing that eases each node toward its target.

use bevy::prelude::*;
use constants::render_settings::{
    BOB_AMPLITUDE, BOB_SPEED, HEIGHT_OFFSET, HEIGHT_SCALE, HIGHLIGHT_SCALE, HOVER_SCALE_GAIN,
    MAGNET_PULL_DISTANCE, MAGNET_RADIUS, SMOOTH_FACTOR,
};

/// Pointer ray in world space, sampled once per frame and shared read-only
/// by every node.
#[derive(Debug, Clone, Copy)]
pub struct PointerRay {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl PointerRay {
    /// Point on the ray closest to `point` (clamped to the forward half).
    pub fn closest_point_to(&self, point: Vec3) -> Vec3 {
        let t = (point - self.origin).dot(self.direction).max(0.0);
        self.origin + self.direction * t
    }

    pub fn distance_to(&self, point: Vec3) -> f32 {
        self.closest_point_to(point).distance(point)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeTarget {
    pub position: Vec3,
    pub scale: f32,
}

/// Resting position of a node: planar anchor, value-driven height and the
/// phase-shifted sine bob that desynchronizes the float animation.
pub fn base_position(anchor: Vec2, value: f32, time: f32, bob_phase: f32) -> Vec3 {
    let height = base_height(value) + (time * BOB_SPEED + bob_phase).sin() * BOB_AMPLITUDE;
    Vec3::new(anchor.x, height, anchor.y)
}

/// Maps a value in [0, 1] to a float height in [2, 7].
pub fn base_height(value: f32) -> f32 {
    value * HEIGHT_SCALE + HEIGHT_OFFSET
}

/// Normalized proximity factor: 1 on the ray, 0 at the magnet radius.
pub fn attraction_strength(dist: f32) -> f32 {
    if dist >= MAGNET_RADIUS {
        0.0
    } else {
        1.0 - dist / MAGNET_RADIUS
    }
}

/// Positional pull in world units. Quadratic falloff sharpens the pull
/// close to the cursor.
pub fn pull_distance(strength: f32) -> f32 {
    strength * strength * MAGNET_PULL_DISTANCE
}

pub fn attraction_scale(strength: f32) -> f32 {
    1.0 + strength * HOVER_SCALE_GAIN
}

/// Where a node wants to be this frame.
///
/// The highlighted node ignores the magnet entirely and pins to its base
/// position at the highlight scale. Everything else attracts toward the
/// pointer ray when inside the magnet radius.
pub fn frame_target(base: Vec3, ray: Option<PointerRay>, highlighted: bool) -> NodeTarget {
    if highlighted {
        return NodeTarget {
            position: base,
            scale: HIGHLIGHT_SCALE,
        };
    }

    let Some(ray) = ray else {
        return NodeTarget {
            position: base,
            scale: 1.0,
        };
    };

    let closest = ray.closest_point_to(base);
    let dist = base.distance(closest);
    let strength = attraction_strength(dist);
    if strength <= 0.0 {
        return NodeTarget {
            position: base,
            scale: 1.0,
        };
    }

    let toward_ray = (closest - base).normalize_or_zero();
    NodeTarget {
        position: base + toward_ray * pull_distance(strength),
        scale: attraction_scale(strength),
    }
}

/// One step of the fixed-factor exponential smoothing. Frame-rate dependent
/// by design; the factor is tuned for vsync'd updates.
pub fn smooth_vec3(current: Vec3, target: Vec3) -> Vec3 {
    current + (target - current) * SMOOTH_FACTOR
}

pub fn smooth_f32(current: f32, target: f32) -> f32 {
    current + (target - current) * SMOOTH_FACTOR
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ray_along_x() -> PointerRay {
        PointerRay {
            origin: Vec3::ZERO,
            direction: Vec3::X,
        }
    }

    #[test]
    fn closest_point_projects_onto_ray() {
        let ray = ray_along_x();
        let closest = ray.closest_point_to(Vec3::new(4.0, 3.0, 0.0));
        assert_eq!(closest, Vec3::new(4.0, 0.0, 0.0));
        assert_eq!(ray.distance_to(Vec3::new(4.0, 3.0, 0.0)), 3.0);
    }

    #[test]
    fn closest_point_never_falls_behind_origin() {
        let ray = ray_along_x();
        let closest = ray.closest_point_to(Vec3::new(-5.0, 1.0, 0.0));
        assert_eq!(closest, Vec3::ZERO);
    }

    #[test]
    fn zero_distance_gives_maximum_pull_and_scale() {
        assert_eq!(attraction_strength(0.0), 1.0);
        assert_eq!(pull_distance(1.0), 3.0);
        assert_eq!(attraction_scale(1.0), 1.8);
    }

    #[test]
    fn attraction_vanishes_at_the_magnet_radius() {
        assert_eq!(attraction_strength(5.0), 0.0);
        assert_eq!(attraction_strength(8.0), 0.0);

        let base = Vec3::new(2.0, 6.0, 0.0);
        let target = frame_target(base, Some(ray_along_x()), false);
        assert_eq!(target.position, base);
        assert_eq!(target.scale, 1.0);
    }

    #[test]
    fn pull_falloff_is_quadratic() {
        // Halfway into the radius: strength 0.5, pull 0.25 * 3.
        assert_eq!(attraction_strength(2.5), 0.5);
        assert_eq!(pull_distance(0.5), 0.75);
        assert_eq!(attraction_scale(0.5), 1.4);
    }

    #[test]
    fn nodes_inside_the_radius_move_toward_the_ray() {
        let base = Vec3::new(2.0, 2.0, 0.0);
        let target = frame_target(base, Some(ray_along_x()), false);

        let expected_strength = 1.0 - 2.0 / 5.0;
        let expected = base + Vec3::NEG_Y * pull_distance(expected_strength);
        assert!(target.position.distance(expected) < 1e-5);
        assert!((target.scale - attraction_scale(expected_strength)).abs() < 1e-5);
    }

    #[test]
    fn highlight_overrides_attraction_at_any_distance() {
        let near = frame_target(Vec3::new(0.5, 0.0, 0.0), Some(ray_along_x()), true);
        assert_eq!(near.scale, 2.5);
        assert_eq!(near.position, Vec3::new(0.5, 0.0, 0.0));

        let far = frame_target(Vec3::new(0.0, 100.0, 0.0), Some(ray_along_x()), true);
        assert_eq!(far.scale, 2.5);
        assert_eq!(far.position, Vec3::new(0.0, 100.0, 0.0));
    }

    #[test]
    fn no_pointer_ray_means_no_attraction() {
        let base = Vec3::new(1.0, 2.0, 3.0);
        let target = frame_target(base, None, false);
        assert_eq!(target.position, base);
        assert_eq!(target.scale, 1.0);
    }

    #[test]
    fn smoothing_converges_geometrically() {
        let target = Vec3::new(10.0, 5.0, -3.0);
        let mut current = Vec3::ZERO;
        let initial_error = current.distance(target);

        for frame in 1..=300 {
            current = smooth_vec3(current, target);
            let bound = initial_error * (1.0 - SMOOTH_FACTOR).powi(frame);
            assert!(current.distance(target) <= bound * 1.001 + 1e-3);
        }
        assert!(current.distance(target) < 1e-2);
    }

    #[test]
    fn scalar_smoothing_reaches_target_within_bounded_frames() {
        let mut scale: f32 = 1.0;
        let mut frames = 0;
        while (2.5 - scale).abs() > 0.01 {
            scale = smooth_f32(scale, 2.5);
            frames += 1;
            assert!(frames < 200, "smoothing failed to converge");
        }
        // ln(0.01 / 1.5) / ln(0.95) ~= 98 frames.
        assert!(frames <= 100);
    }

    #[test]
    fn base_height_maps_unit_value_to_float_band() {
        assert_eq!(base_height(0.0), 2.0);
        assert_eq!(base_height(1.0), 7.0);
    }

    #[test]
    fn bob_stays_within_amplitude() {
        for step in 0..500 {
            let t = step as f32 * 0.1;
            let pos = base_position(Vec2::new(3.0, -4.0), 0.5, t, 1.3);
            assert_eq!(pos.x, 3.0);
            assert_eq!(pos.z, -4.0);
            assert!((pos.y - base_height(0.5)).abs() <= BOB_AMPLITUDE + 1e-6);
        }
    }
}
