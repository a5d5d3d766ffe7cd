use bevy::pbr::{DistanceFog, FogFalloff};
use bevy::{
    input::mouse::{MouseMotion, MouseWheel},
    prelude::*,
};
use constants::render_settings::{CAMERA_MAX_DISTANCE, CAMERA_MIN_DISTANCE, FOG_END, FOG_START};

/// Orbit camera around the scene origin. No panning; the scatter cluster
/// stays centered.
#[derive(Resource)]
pub struct OrbitCamera {
    pub focus: Vec3,
    pub distance: f32,
    pub yaw: f32,
    pub pitch: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        // Matches the initial spawn at (0, 5, 20) looking at the origin.
        Self {
            focus: Vec3::ZERO,
            distance: Vec3::new(0.0, 5.0, 20.0).length(),
            yaw: 0.0,
            pitch: -(5.0_f32 / 20.0).atan(),
        }
    }
}

impl OrbitCamera {
    /// Pitch clamp keeps the camera above the floor plane.
    pub fn clamp(&mut self) {
        self.pitch = self.pitch.clamp(-1.47, -0.05);
        self.distance = self.distance.clamp(CAMERA_MIN_DISTANCE, CAMERA_MAX_DISTANCE);
    }

    pub fn target_transform(&self) -> Transform {
        let rotation = Quat::from_rotation_y(self.yaw) * Quat::from_rotation_x(self.pitch);
        let offset = rotation * Vec3::new(0.0, 0.0, self.distance);
        Transform::from_translation(self.focus + offset).looking_at(self.focus, Vec3::Y)
    }
}

pub fn spawn_camera(commands: &mut Commands) {
    let orbit = OrbitCamera::default();
    commands.spawn((
        Camera3d::default(),
        orbit.target_transform(),
        Projection::from(PerspectiveProjection {
            fov: 60.0_f32.to_radians(),
            ..default()
        }),
        DistanceFog {
            color: Color::srgb_u8(0x0a, 0x0a, 0x0a),
            falloff: FogFalloff::Linear {
                start: FOG_START,
                end: FOG_END,
            },
            ..default()
        },
    ));
    commands.insert_resource(orbit);
}

/// Drag to orbit, scroll to zoom. The transform eases toward the orbit
/// target so camera motion stays smooth.
pub fn camera_controller(
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
    mut orbit: ResMut<OrbitCamera>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    time: Res<Time>,
) {
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    for scroll in scroll_events.read() {
        let zoom_factor = if scroll.y > 0.0 { 0.9 } else { 1.1 };
        orbit.distance *= zoom_factor;
    }

    let total_motion: Vec2 = mouse_motion.read().map(|motion| motion.delta).sum();
    let is_rotating =
        mouse_button.pressed(MouseButton::Left) || mouse_button.pressed(MouseButton::Right);

    if is_rotating && total_motion != Vec2::ZERO {
        let sensitivity = 0.005;
        orbit.yaw -= total_motion.x * sensitivity;
        orbit.pitch -= total_motion.y * sensitivity;
    }

    orbit.clamp();

    let target = orbit.target_transform();
    let lerp_speed = (12.0 * time.delta_secs()).min(1.0);
    camera_transform.translation = camera_transform
        .translation
        .lerp(target.translation, lerp_speed);
    camera_transform.rotation = camera_transform.rotation.slerp(target.rotation, lerp_speed);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_clamps_to_configured_range() {
        let mut orbit = OrbitCamera::default();
        orbit.distance = 1.0;
        orbit.clamp();
        assert_eq!(orbit.distance, CAMERA_MIN_DISTANCE);

        orbit.distance = 500.0;
        orbit.clamp();
        assert_eq!(orbit.distance, CAMERA_MAX_DISTANCE);
    }

    #[test]
    fn pitch_clamp_keeps_camera_above_floor() {
        let mut orbit = OrbitCamera::default();
        orbit.pitch = 0.4;
        orbit.clamp();
        assert!(orbit.pitch < 0.0);

        let transform = orbit.target_transform();
        assert!(transform.translation.y > 0.0);
    }

    #[test]
    fn default_orbit_matches_initial_view() {
        let transform = OrbitCamera::default().target_transform();
        assert!(transform.translation.distance(Vec3::new(0.0, 5.0, 20.0)) < 0.1);
    }
}
