//! Shadow Legends - a terminal top-down RPG.
//!
//! The library holds all game rules so they can be driven and tested
//! without a terminal: the [`core::Session`] state machine, the entity
//! model, items, quests, combat, and exploration.

pub mod character;
pub mod combat;
pub mod core;
pub mod exploration;
pub mod items;
pub mod quests;

pub use crate::core::{GameConfig, GameError, GameFlow, Input, Session, SessionSnapshot};
