pub mod motion;

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use constants::category::Category;
use constants::render_settings::{
    HIGHLIGHT_EMISSIVE, HOVER_EMISSIVE_BOOST, NODE_RADIUS, VALUE_EMISSIVE_SCALE,
};
use rand::Rng;

use crate::engine::assets::athlete::AthleteRoster;
use crate::engine::picking::SelectionState;
use motion::{PointerRay, base_height, base_position, frame_target, smooth_f32, smooth_vec3};

/// One floating scatter node. Owns its own smoothed scale; its smoothed
/// position lives in the entity `Transform`. No other node ever writes it.
#[derive(Component)]
pub struct AthleteNode {
    pub id: u32,
    pub value: f32,
    pub category: Category,
    /// Floor anchor (x, z); height is derived from `value` each frame.
    pub anchor: Vec2,
    /// Random phase assigned at spawn so nodes never bob in sync.
    pub bob_phase: f32,
    pub scale: f32,
}

/// Spawn one node entity per athlete: a shared sphere mesh with a per-node
/// material instance so emissive can be driven individually.
pub fn spawn_athlete_nodes(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    roster: &AthleteRoster,
) {
    let sphere = meshes.add(Sphere::new(NODE_RADIUS));
    let mut rng = rand::thread_rng();

    for athlete in &roster.athletes {
        let color = athlete.category.color();
        let material = materials.add(StandardMaterial {
            base_color: color.with_alpha(0.9),
            emissive: color.to_linear() * (athlete.value * VALUE_EMISSIVE_SCALE),
            perceptual_roughness: 0.1,
            metallic: 0.8,
            alpha_mode: AlphaMode::Blend,
            ..default()
        });

        let anchor = Vec2::new(athlete.position[0], athlete.position[2]);
        commands.spawn((
            AthleteNode {
                id: athlete.id,
                value: athlete.value,
                category: athlete.category,
                anchor,
                bob_phase: rng.gen_range(0.0..std::f32::consts::TAU),
                scale: 1.0,
            },
            Mesh3d(sphere.clone()),
            MeshMaterial3d(material),
            Transform::from_xyz(anchor.x, base_height(athlete.value), anchor.y),
        ));
    }

    info!("Spawned {} athlete nodes", roster.len());
}

/// Per-frame update of every node: bob, magnet attraction, highlight
/// override, smoothing, and the emissive response to hover/highlight.
pub fn animate_nodes(
    time: Res<Time>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&GlobalTransform, &Camera), With<Camera3d>>,
    selection: Res<SelectionState>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut nodes: Query<(
        &mut AthleteNode,
        &mut Transform,
        &MeshMaterial3d<StandardMaterial>,
    )>,
) {
    let ray = pointer_ray(&windows, &cameras);
    let elapsed = time.elapsed_secs();

    for (mut node, mut transform, material_handle) in &mut nodes {
        let base = base_position(node.anchor, node.value, elapsed, node.bob_phase);
        let highlighted = selection.highlighted == Some(node.id);
        let target = frame_target(base, ray, highlighted);

        transform.translation = smooth_vec3(transform.translation, target.position);
        node.scale = smooth_f32(node.scale, target.scale);
        transform.scale = Vec3::splat(node.scale);

        if let Some(material) = materials.get_mut(&material_handle.0) {
            let hovered = selection.hovered == Some(node.id);
            let intensity = if highlighted {
                HIGHLIGHT_EMISSIVE
            } else if hovered {
                node.value * VALUE_EMISSIVE_SCALE + HOVER_EMISSIVE_BOOST
            } else {
                node.value * VALUE_EMISSIVE_SCALE
            };
            material.emissive = node.category.color().to_linear() * intensity;
        }
    }
}

/// Thin line from each node's floor anchor up to its current position,
/// grounding the floating node visually.
pub fn draw_anchor_lines(mut gizmos: Gizmos, nodes: Query<(&AthleteNode, &Transform)>) {
    for (node, transform) in &nodes {
        let floor = Vec3::new(node.anchor.x, 0.0, node.anchor.y);
        gizmos.line(
            floor,
            transform.translation,
            node.category.color().with_alpha(0.35),
        );
    }
}

/// Pointer ray through the cursor, if the cursor is over the window.
pub fn pointer_ray(
    windows: &Query<&Window, With<PrimaryWindow>>,
    cameras: &Query<(&GlobalTransform, &Camera), With<Camera3d>>,
) -> Option<PointerRay> {
    let window = windows.single().ok()?;
    let cursor_pos = window.cursor_position()?;
    let (cam_xf, camera) = cameras.single().ok()?;
    let ray = camera.viewport_to_world(cam_xf, cursor_pos).ok()?;

    Some(PointerRay {
        origin: ray.origin,
        direction: ray.direction.as_vec3(),
    })
}
