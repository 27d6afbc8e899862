// Core module with tile kinds and the tile grid
pub mod core;

// Player module with collision, movement and inventory
pub mod player;

// World module with generation and structures
pub mod world;

// Game session and command line runner
pub mod app;

// Other modules
pub mod constants;
pub mod save;
pub mod utils;

// Re-exports
pub use app::{Game, run_game};
pub use core::{TileGrid, TileType};
pub use player::{
    Aabb, ActorState, CollisionConfig, CollisionPolicy, InputState, Inventory, resolve_horizontal,
    resolve_vertical,
};
pub use save::{DEFAULT_WORLD_FILE, SavedWorld, load_world, save_world};
pub use utils::GameSettings;
pub use world::{FlatWorld, WorldGenerator, WorldState, generate_world};
