//! Item system: types, effects, and inventory consumption.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
