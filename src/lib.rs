pub mod cli;
pub mod loaders;
pub mod math;
pub mod renderer;
pub mod scene;
pub mod types;

pub use loaders::{load_scene, parse_scene, LoadError};
pub use renderer::{render, resolve_cell, GridConfig};
pub use scene::Scene;
pub use types::{Triangle, Vertex};
