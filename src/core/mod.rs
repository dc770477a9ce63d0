//! Session state machine, configuration, and ambient plumbing.

pub mod config;
pub mod constants;
pub mod error;
pub mod input;
pub mod logging;
pub mod menu;
pub mod session;
pub mod snapshot;

pub use config::GameConfig;
pub use error::GameError;
pub use input::Input;
pub use menu::{MainMenuOption, MenuCursor, PauseOption};
pub use session::{GameFlow, Session};
pub use snapshot::{EnemySnapshot, PlayerSnapshot, QuestSnapshot, SessionSnapshot};
