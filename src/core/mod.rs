//! Core data structures for the game
//! Contains the tile kinds and the tile grid.

pub mod block;
pub mod grid;

// Re-export commonly used types
pub use block::TileType;
pub use grid::TileGrid;
