//! Core types: players, roles, configuration, state, RNG, errors.
//!
//! Everything the rules operate on lives here. The rules themselves are in
//! `crate::rules`.

pub mod config;
pub mod error;
pub mod names;
pub mod player;
pub mod rng;
pub mod state;

pub use config::{GameConfig, MAX_PLAYERS, MIN_PLAYERS};
pub use error::{ConfigError, InvalidAction, NameError, SessionError, SettingsError, WordSourceError};
pub use player::{Player, PlayerId, Role, Winner};
pub use rng::GameRng;
pub use state::{GameEvent, GameState, Phase, RoleCounts};
