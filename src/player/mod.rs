//! Player-related modules
//! Contains collision, movement, input and inventory.

pub mod actor;
pub mod collision;
pub mod input;
pub mod inventory;

// Re-export commonly used types
pub use actor::{ActorState, TickOutcome};
pub use collision::{Aabb, CollisionConfig, CollisionPolicy, resolve_horizontal, resolve_vertical};
pub use input::InputState;
pub use inventory::{HOTBAR, Inventory};
