pub mod assets;
pub mod camera;
pub mod core;
pub mod loading;
pub mod nodes;
pub mod picking;
pub mod scene;
