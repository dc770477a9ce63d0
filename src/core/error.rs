//! Errors raised by the game-flow state machine.

use crate::character::EnemyId;
use crate::core::session::GameFlow;

/// Caller bugs in driving a [`Session`](crate::core::session::Session).
///
/// Invalid player actions never show up here; they are reported through
/// status messages instead.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("invalid transition from {from} to {to}")]
    InvalidTransition { from: GameFlow, to: GameFlow },

    #[error("combat entered without an encountered enemy")]
    NoEncounter,

    #[error("no player has been created yet")]
    NoPlayer,

    #[error("enemy {0} is not in the roster")]
    UnknownEnemy(EnemyId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GameError::InvalidTransition {
            from: GameFlow::MainMenu,
            to: GameFlow::Combat,
        };
        assert_eq!(err.to_string(), "invalid transition from Main Menu to Combat");
        assert_eq!(
            GameError::UnknownEnemy(EnemyId(3)).to_string(),
            "enemy #3 is not in the roster"
        );
    }
}
