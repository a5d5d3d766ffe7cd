use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use constants::render_settings::NODE_RADIUS;

use crate::engine::nodes::{AthleteNode, pointer_ray};

/// Top-level selection state: the node under the cursor and the node pinned
/// by the search box. Both are read by the animation and the tooltip.
#[derive(Resource, Default)]
pub struct SelectionState {
    pub hovered: Option<u32>,
    pub highlighted: Option<u32>,
}

impl SelectionState {
    /// Node the tooltip should describe; the search highlight wins over a
    /// plain hover.
    pub fn inspected(&self) -> Option<u32> {
        self.highlighted.or(self.hovered)
    }
}

/// Resolve the hovered node each frame: nearest along the pointer ray among
/// the nodes whose smoothed center lies within their scaled radius of it.
pub fn update_hover(
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&GlobalTransform, &Camera), With<Camera3d>>,
    nodes: Query<(&AthleteNode, &Transform)>,
    mut selection: ResMut<SelectionState>,
) {
    let Some(ray) = pointer_ray(&windows, &cameras) else {
        if selection.hovered.is_some() {
            selection.hovered = None;
        }
        return;
    };

    let mut best: Option<(u32, f32)> = None;
    for (node, transform) in &nodes {
        let radius = NODE_RADIUS * node.scale;
        if let Some(t) = ray_hits_sphere(ray.origin, ray.direction, transform.translation, radius)
        {
            if best.is_none_or(|(_, best_t)| t < best_t) {
                best = Some((node.id, t));
            }
        }
    }

    let hovered = best.map(|(id, _)| id);
    if selection.hovered != hovered {
        selection.hovered = hovered;
    }
}

/// Distance along the ray to the closest approach, if the approach passes
/// within `radius` of `center`. Behind-the-origin approaches miss.
pub fn ray_hits_sphere(origin: Vec3, dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let t = (center - origin).dot(dir);
    if t < 0.0 {
        return None;
    }
    let closest = origin + dir * t;
    if closest.distance(center) <= radius {
        Some(t)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ray_through_center_hits() {
        let t = ray_hits_sphere(Vec3::ZERO, Vec3::X, Vec3::new(5.0, 0.0, 0.0), 0.4);
        assert_eq!(t, Some(5.0));
    }

    #[test]
    fn grazing_within_radius_hits() {
        let t = ray_hits_sphere(Vec3::ZERO, Vec3::X, Vec3::new(5.0, 0.3, 0.0), 0.4);
        assert_eq!(t, Some(5.0));
    }

    #[test]
    fn miss_outside_radius() {
        assert!(ray_hits_sphere(Vec3::ZERO, Vec3::X, Vec3::new(5.0, 1.0, 0.0), 0.4).is_none());
    }

    #[test]
    fn behind_the_camera_misses() {
        assert!(ray_hits_sphere(Vec3::ZERO, Vec3::X, Vec3::new(-5.0, 0.0, 0.0), 0.4).is_none());
    }

    #[test]
    fn highlight_wins_over_hover_for_inspection() {
        let selection = SelectionState {
            hovered: Some(1),
            highlighted: Some(2),
        };
        assert_eq!(selection.inspected(), Some(2));

        let hover_only = SelectionState {
            hovered: Some(1),
            highlighted: None,
        };
        assert_eq!(hover_only.inspected(), Some(1));
    }
}
