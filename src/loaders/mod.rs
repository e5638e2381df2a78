pub mod csv;

pub use csv::{load_scene, parse_scene, LoadError};
