/// Maximum distance from the pointer ray at which a node starts attracting.
pub const MAGNET_RADIUS: f32 = 5.0;

/// World units a node moves toward the ray at full attraction strength.
pub const MAGNET_PULL_DISTANCE: f32 = 3.0;

/// Extra scale gained at full attraction strength.
pub const HOVER_SCALE_GAIN: f32 = 0.8;

/// Scale forced on the search-highlighted node.
pub const HIGHLIGHT_SCALE: f32 = 2.5;

/// Per-frame exponential smoothing factor for position and scale.
pub const SMOOTH_FACTOR: f32 = 0.05;

/// Floating bob animation: angular speed and amplitude of the sine offset.
pub const BOB_SPEED: f32 = 0.5;
pub const BOB_AMPLITUDE: f32 = 0.2;

/// Value-to-height mapping: a value in [0, 1] floats between 2 and 7.
pub const HEIGHT_SCALE: f32 = 5.0;
pub const HEIGHT_OFFSET: f32 = 2.0;

/// Node sphere radius in world units.
pub const NODE_RADIUS: f32 = 0.4;

/// Emissive intensity of the highlighted node; hover adds a flat boost on
/// top of the value-driven base intensity.
pub const HIGHLIGHT_EMISSIVE: f32 = 10.0;
pub const VALUE_EMISSIVE_SCALE: f32 = 2.0;
pub const HOVER_EMISSIVE_BOOST: f32 = 2.0;

/// Distance fog range around the scene.
pub const FOG_START: f32 = 10.0;
pub const FOG_END: f32 = 40.0;

/// Orbit camera zoom clamp.
pub const CAMERA_MIN_DISTANCE: f32 = 5.0;
pub const CAMERA_MAX_DISTANCE: f32 = 30.0;

/// Floor grid: total extent, cell size, section line cadence and edge fade.
pub const GRID_EXTENT: f32 = 40.0;
pub const GRID_CELL_SIZE: f32 = 1.0;
pub const GRID_SECTION_EVERY: u32 = 10;
pub const GRID_FADE_DISTANCE: f32 = 20.0;
