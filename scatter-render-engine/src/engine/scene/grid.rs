/// Flat floor grid rendering with section lines and edge fade
use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;
use bevy::render::view::NoFrustumCulling;

use constants::render_settings::{
    GRID_CELL_SIZE, GRID_EXTENT, GRID_FADE_DISTANCE, GRID_SECTION_EVERY,
};

#[derive(Component)]
pub struct GroundGrid;

const CELL_COLOR: (f32, f32, f32) = (0.2, 0.2, 0.2);
const SECTION_COLOR: (f32, f32, f32) = (0.33, 0.33, 0.33);

/// Segments per line so the edge fade varies along each line, not only
/// between lines.
const SEGMENTS_PER_LINE: usize = 40;

/// Create the ground grid at y = 0 under the scatter cluster.
pub fn create_ground_grid(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
) {
    let grid_material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    });

    let line_count = (GRID_EXTENT / GRID_CELL_SIZE).round() as u32;
    let half = GRID_EXTENT * 0.5;

    // X-fixed lines running along Z, then Z-fixed lines running along X.
    for i in 0..=line_count {
        let fixed = -half + i as f32 * GRID_CELL_SIZE;
        let mesh = create_grid_line_mesh(fixed, true, i % GRID_SECTION_EVERY == 0, half);
        spawn_grid_line_entity(commands, meshes, grid_material.clone(), mesh);
    }
    for i in 0..=line_count {
        let fixed = -half + i as f32 * GRID_CELL_SIZE;
        let mesh = create_grid_line_mesh(fixed, false, i % GRID_SECTION_EVERY == 0, half);
        spawn_grid_line_entity(commands, meshes, grid_material.clone(), mesh);
    }
}

/// Single grid line as a LineList mesh with per-vertex color so alpha can
/// fade with distance from the scene center.
fn create_grid_line_mesh(fixed_coord: f32, is_x_fixed: bool, is_section: bool, half: f32) -> Mesh {
    let mut vertices = Vec::with_capacity(SEGMENTS_PER_LINE + 1);
    let mut colors = Vec::with_capacity(SEGMENTS_PER_LINE + 1);
    let mut indices = Vec::with_capacity(SEGMENTS_PER_LINE * 2);

    let (r, g, b) = if is_section {
        SECTION_COLOR
    } else {
        CELL_COLOR
    };
    let step = (half * 2.0) / SEGMENTS_PER_LINE as f32;

    for i in 0..=SEGMENTS_PER_LINE {
        let varying = -half + i as f32 * step;
        let (x, z) = if is_x_fixed {
            (fixed_coord, varying)
        } else {
            (varying, fixed_coord)
        };

        vertices.push([x, 0.0, z]);
        colors.push([r, g, b, edge_fade(x, z)]);
    }

    for i in 0..SEGMENTS_PER_LINE {
        indices.extend_from_slice(&[i as u32, (i + 1) as u32]);
    }

    let mut mesh = Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::RENDER_WORLD);
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, vertices);
    mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, colors);
    mesh.insert_indices(bevy::render::mesh::Indices::U32(indices));

    mesh
}

/// Alpha falloff from the center, fully transparent past the fade distance.
fn edge_fade(x: f32, z: f32) -> f32 {
    let dist = (x * x + z * z).sqrt();
    (1.0 - dist / GRID_FADE_DISTANCE).clamp(0.0, 1.0)
}

fn spawn_grid_line_entity(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    grid_material: Handle<StandardMaterial>,
    line_mesh: Mesh,
) {
    commands.spawn((
        Mesh3d(meshes.add(line_mesh)),
        MeshMaterial3d(grid_material),
        Visibility::Visible,
        NoFrustumCulling,
        Transform::IDENTITY,
        GroundGrid,
    ));
}
