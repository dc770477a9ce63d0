//! Entity model: player, enemies, and the rules they share.

pub mod creation;
pub mod logic;
pub mod types;

pub use creation::*;
pub use logic::*;
pub use types::*;
