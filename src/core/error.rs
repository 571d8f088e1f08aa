//! Error types for session and combat operations.
//!
//! Nothing here is fatal. Every variant describes a rejected request that left
//! the session untouched (character creation is the one exception: it recovers
//! by falling back to a default class instead of failing).

use thiserror::Error;

pub type GameResult<T> = Result<T, GameError>;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("unknown class '{0}'")]
    UnknownClass(String),

    #[error("unknown enemy '{0}'")]
    UnknownEnemy(String),

    #[error("unknown location '{0}'")]
    InvalidLocation(String),

    #[error("no character has been created yet")]
    NoPlayer,

    #[error("no enemies live in '{0}'")]
    EmptyEncounterTable(String),

    #[error("it is not the player's turn")]
    ActionWhileNotPlayerTurn,

    #[error("a combat is already in progress")]
    CombatInProgress,

    #[error("unknown action '{0}'")]
    UnknownAction(String),

    #[error("invalid game data: {0}")]
    Data(#[from] serde_json::Error),

    #[error("inconsistent game data: {0}")]
    InvalidData(String),
}

impl GameError {
    /// Errors the player never hears about. Everything else gets a log line
    /// or a diagnostic.
    pub fn is_silent(&self) -> bool {
        matches!(self, GameError::ActionWhileNotPlayerTurn)
    }
}
