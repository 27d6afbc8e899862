//! Surface decorations stamped after terrain generation.

pub mod house;
pub mod structure;
pub mod tree;
pub mod well;

pub use house::House;
pub use structure::Structure;
pub use tree::grow_tree;
pub use well::Well;
