//! # mr-white
//!
//! Engine for the "hidden word" party game (Mr. White / Undercover).
//!
//! Players are dealt secret roles: Civilians share a word, Impostors get a
//! related word, and Mr. White gets none. Each round everyone gives a clue,
//! the table votes someone out, and the game ends when one side wins.
//!
//! ## Design Principles
//!
//! 1. **Single owner**: one [`GameSession`] per table owns all state. No
//!    globals.
//!
//! 2. **Pure projection**: front ends read a [`view::GameView`] and send
//!    actions back; the engine never draws anything.
//!
//! 3. **Explicit pauses**: timed transitions are tickets the caller fires,
//!    so acting early can never run a transition twice.
//!
//! 4. **Fair dealing**: roles, starter, and words come from independent
//!    seeded streams with unbiased shuffles.
//!
//! ## Modules
//!
//! - `core`: Player IDs, roles, config, state, RNG, errors
//! - `words`: Word pairs, the word-list source and its fallback
//! - `rules`: Dealing, turn order, clues, victory, the round engine
//! - `session`: Setup flow and persisted settings
//! - `view`: Renderable projection of a game

pub mod core;
pub mod rules;
pub mod session;
pub mod view;
pub mod words;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, GameConfig, GameEvent, GameRng, GameState, InvalidAction, NameError, Phase, Player,
    PlayerId, Role, RoleCounts, SessionError, Winner,
};

pub use crate::rules::{GameBuilder, RoundEngine, Scheduled, SpokenClue, Ticket, TurnSequencer, Verdict};

pub use crate::session::{FileSettingsStore, GameSession, MemorySettingsStore, Settings, SettingsStore};

pub use crate::words::{JsonFileSource, LoadStatus, SecretWords, WordPair, WordPairSource};
