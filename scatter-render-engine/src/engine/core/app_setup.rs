use bevy::asset::AssetMetaCheck;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

use crate::engine::assets::athlete::{AthleteDataSet, AthleteRoster};
use crate::engine::camera::{camera_controller, spawn_camera};
use crate::engine::core::app_state::AppState;
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::data_loader::{
    DataSetLoader, handle_load_failure, poll_data_set, start_loading,
};
use crate::engine::nodes::{animate_nodes, draw_anchor_lines};
use crate::engine::picking::{SelectionState, update_hover};
use crate::engine::scene::environment::setup_environment;
use crate::engine::scene::grid::create_ground_grid;
use crate::tools::search::{SearchState, search_box_focus, search_text_entry, update_highlight};
use crate::ui::overlay::{reflect_search_box, spawn_overlay, update_node_counter};
use crate::ui::tooltip::{spawn_tooltip, update_tooltip};

/// Create the application: scene environment, dataset loading, the per-frame
/// node animation and the overlay UI.
pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .add_plugins(JsonAssetPlugin::<AthleteDataSet>::new(&["json"]))
        .init_state::<AppState>()
        .init_resource::<DataSetLoader>()
        .init_resource::<AthleteRoster>()
        .init_resource::<SelectionState>()
        .init_resource::<SearchState>()
        .add_systems(Startup, (setup, start_loading))
        .add_systems(
            Update,
            (
                (poll_data_set, handle_load_failure).run_if(in_state(AppState::Loading)),
                camera_controller,
                (update_hover, animate_nodes, draw_anchor_lines)
                    .chain()
                    .run_if(in_state(AppState::Running)),
                (search_box_focus, search_text_entry, update_highlight).chain(),
                (update_node_counter, reflect_search_box, update_tooltip),
            ),
        );

    app
}

/// Static scene content; the athlete nodes arrive once the dataset loads.
fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    setup_environment(&mut commands);
    create_ground_grid(&mut commands, &mut meshes, &mut materials);
    spawn_camera(&mut commands);
    spawn_overlay(&mut commands);
    spawn_tooltip(&mut commands);
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
