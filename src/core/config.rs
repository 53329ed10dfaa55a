//! Game configuration: how many players and how many of each special role.
//!
//! Civilians are never configured directly; they fill every seat not taken
//! by an Impostor or a Mr. White.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Fewest players a game can have.
pub const MIN_PLAYERS: usize = 3;

/// Most players a game can have (player IDs are `u8`).
pub const MAX_PLAYERS: usize = 255;

/// Player and role counts for one game.
///
/// ## Example
///
/// ```
/// use mr_white::core::GameConfig;
///
/// let config = GameConfig::new(5).with_impostors(1).with_mr_whites(1);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.civilian_count(), 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameConfig {
    pub player_count: usize,
    pub impostor_count: usize,
    pub mr_white_count: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: 6,
            impostor_count: 1,
            mr_white_count: 1,
        }
    }
}

impl GameConfig {
    /// Config with `player_count` players and no special roles.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            impostor_count: 0,
            mr_white_count: 0,
        }
    }

    /// Set the number of Impostors.
    #[must_use]
    pub fn with_impostors(mut self, count: usize) -> Self {
        self.impostor_count = count;
        self
    }

    /// Set the number of Mr. Whites.
    #[must_use]
    pub fn with_mr_whites(mut self, count: usize) -> Self {
        self.mr_white_count = count;
        self
    }

    /// Impostors plus Mr. Whites.
    #[must_use]
    pub fn special_count(&self) -> usize {
        self.impostor_count.saturating_add(self.mr_white_count)
    }

    /// Seats left for Civilians (0 when over-subscribed).
    #[must_use]
    pub fn civilian_count(&self) -> usize {
        self.player_count.saturating_sub(self.special_count())
    }

    /// Check the counts, reporting the first rule broken.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player_count < MIN_PLAYERS {
            return Err(ConfigError::TooFewPlayers);
        }
        if self.player_count > MAX_PLAYERS {
            return Err(ConfigError::TooManyPlayers);
        }
        if self.special_count() > self.player_count {
            return Err(ConfigError::TooManySpecialRoles);
        }
        if self.civilian_count() < 1 {
            return Err(ConfigError::NoCivilian);
        }
        Ok(())
    }

    /// One-line role breakdown for the setup screen.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "👤 Civilians: {} • 🕵️ Impostors: {} • 🤐 Mr. White: {}",
            self.civilian_count(),
            self.impostor_count,
            self.mr_white_count
        )
    }
}
