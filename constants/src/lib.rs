//! Shared definitions for the scatter visualization workspace.
//!
//! Holds the athlete category table used by both the data pipeline and the
//! render engine, plus the interaction and scene tuning constants.

pub mod category;
pub mod render_settings;
