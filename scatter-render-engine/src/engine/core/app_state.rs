use bevy::prelude::*;

/// Dataset load lifecycle. The scene starts empty in `Loading`, switches to
/// `Running` once nodes are spawned, and parks in `LoadFailed` when the
/// asset server reports an error (the overlay then keeps showing "000").
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Running,
    LoadFailed,
}
