use bevy::asset::AssetLoadFailedEvent;
use bevy::prelude::*;

use crate::engine::assets::athlete::{AthleteDataSet, AthleteRoster};
use crate::engine::core::app_state::AppState;
use crate::engine::nodes::spawn_athlete_nodes;

const RELATIVE_DATA_PATH: &str = "data.json";

#[derive(Resource, Default)]
pub struct DataSetLoader {
    handle: Option<Handle<AthleteDataSet>>,
}

/// Kick off the one-shot dataset load.
pub fn start_loading(mut loader: ResMut<DataSetLoader>, asset_server: Res<AssetServer>) {
    info!("Loading dataset from: {RELATIVE_DATA_PATH}");
    loader.handle = Some(asset_server.load(RELATIVE_DATA_PATH));
}

/// Poll until the dataset asset arrives, then take ownership of the list,
/// spawn the scene nodes and transition to `Running`.
pub fn poll_data_set(
    loader: Res<DataSetLoader>,
    datasets: Res<Assets<AthleteDataSet>>,
    mut roster: ResMut<AthleteRoster>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let Some(ref handle) = loader.handle else {
        return;
    };
    let Some(data_set) = datasets.get(handle) else {
        return;
    };

    info!("✓ Dataset loaded: {} athletes", data_set.0.len());
    roster.athletes = data_set.0.clone();
    spawn_athlete_nodes(&mut commands, &mut meshes, &mut materials, &roster);
    next_state.set(AppState::Running);
}

/// The single failure mode: a failed fetch logs the error and leaves the
/// scene empty. No retry.
pub fn handle_load_failure(
    mut events: EventReader<AssetLoadFailedEvent<AthleteDataSet>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    for event in events.read() {
        error!("Failed to load dataset {}: {}", event.path, event.error);
        next_state.set(AppState::LoadFailed);
    }
}
