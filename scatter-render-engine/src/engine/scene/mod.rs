pub mod environment;
pub mod grid;
