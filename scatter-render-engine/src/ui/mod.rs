//! Overlay UI: header, node counter, search box, legend and the hover
//! tooltip. Purely presentational; systems here only reflect top-level
//! state into text and layout nodes.

pub mod overlay;
pub mod tooltip;
