//! Top-down exploration and the collision encounter trigger.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
