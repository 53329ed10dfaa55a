//! Error types.
//!
//! Nothing here is fatal: word-list failures are recovered with a fallback,
//! validation failures block progression without touching state, and
//! invalid actions are rejected as no-ops.

use thiserror::Error;

use super::player::PlayerId;

/// Invalid player/role counts. Messages are shown to players as-is.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("⚠️ At least 3 players are required.")]
    TooFewPlayers,
    #[error("⚠️ At most 255 players are supported.")]
    TooManyPlayers,
    #[error("⚠️ Too many special roles for the number of players.")]
    TooManySpecialRoles,
    #[error("⚠️ There must be at least 1 Civilian.")]
    NoCivilian,
}

/// Invalid roster of display names.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("⚠️ Two players have the same name ({name}). Pick different names.")]
    Duplicate { name: String },
    #[error("expected {expected} names, got {actual}")]
    WrongCount { expected: usize, actual: usize },
}

/// Why the word-pair source could not be used.
#[derive(Debug, Error)]
pub enum WordSourceError {
    #[error("could not read word list: {0}")]
    Io(#[from] std::io::Error),
    #[error("word list is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("word list is empty or invalid")]
    Empty,
}

/// Settings could not be written.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("could not write settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not encode settings: {0}")]
    Encode(#[from] serde_json::Error),
}

/// An engine action that does not apply in the current state.
///
/// The engine leaves its state untouched when returning one of these.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvalidAction {
    #[error("{action} is not allowed during {phase}")]
    WrongPhase {
        action: &'static str,
        phase: &'static str,
    },
    #[error("no vote selected")]
    NoVoteSelected,
    #[error("{0} is not a living player")]
    NotAlive(PlayerId),
    #[error("{0} is not at the table")]
    UnknownPlayer(PlayerId),
    #[error("card must be revealed before passing the device")]
    CardNotRevealed,
    #[error("scheduled transition {0} is no longer pending")]
    StaleTicket(u64),
}

/// Failure while moving through setup.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Names(#[from] NameError),
}
