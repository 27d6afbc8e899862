// World constants
pub const TILE_SIZE: f32 = 40.0;
pub const WORLD_WIDTH: i32 = 400;
pub const WORLD_HEIGHT: i32 = 100;
pub const SOIL_DEPTH: i32 = 3;
// The surface band floor sits this many rows above the bottom of the world
pub const SURFACE_FLOOR_MARGIN: i32 = 10;

// Generation constants
pub const CAVE_CHANCE: f64 = 0.05;
pub const ORE_WIDTH_COAL: f64 = 0.010;
pub const ORE_WIDTH_IRON: f64 = 0.005;
pub const ORE_WIDTH_GOLD: f64 = 0.003;
pub const ORE_WIDTH_DIAMOND: f64 = 0.001;
pub const STRUCTURE_SPAWN_CHANCE: f64 = 0.02;
pub const HOUSE_PROBABILITY: f64 = 0.5;
pub const TREE_CHANCE: f64 = 0.1;
pub const TREE_TRUNK_MIN: i32 = 3;
pub const TREE_TRUNK_MAX: i32 = 5;

// Player constants
pub const PLAYER_WIDTH: f32 = TILE_SIZE / 2.0;
pub const PLAYER_HEIGHT: f32 = TILE_SIZE;
pub const MOVE_SPEED: f32 = 200.0; // pixels per second
pub const JUMP_VELOCITY: f32 = -400.0; // negative = upward
pub const GRAVITY: f32 = 1000.0; // pixels per second^2
pub const FALL_SAFE_HEIGHT: f32 = 4.0; // in tiles
pub const FALL_DAMAGE_PER_BLOCK: f32 = 1.0;
pub const MAX_HEALTH: i32 = 10;
pub const REGEN_TIME: f32 = 10.0; // seconds per heart
pub const REACH_TILES: f32 = 5.0;

// Collision constants
pub const COLLISION_EPSILON: f32 = 0.1;
