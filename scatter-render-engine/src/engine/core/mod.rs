//! Core application setup and state management.
//!
//! Handles application lifecycle, window configuration, state transitions,
//! and plugin initialisation for both native and WASM targets.

/// Application setup and plugin configuration for the Bevy app.
pub mod app_setup;

/// Application state machine covering the dataset load lifecycle.
pub mod app_state;

/// Platform-specific window configuration for native and WASM builds.
pub mod window_config;
