//! World generation and state
//! Contains terrain generation, structures and the world model.

pub mod generator;
pub mod state;
pub mod structures;

// Re-export commonly used types
pub use generator::{DecorationPolicy, WorldGenerator, generate_world};
pub use state::{FlatWorld, WorldError, WorldState};
