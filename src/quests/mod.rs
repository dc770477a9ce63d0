//! Quest tracker.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
