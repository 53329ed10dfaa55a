//! Player identification, roles, and the per-player roster entry.
//!
//! ## PlayerId
//!
//! Type-safe player identifier supporting 3-255 players.
//!
//! ## Player
//!
//! A seat at the table: display name, secret role and word, alive flag.
//! Roles are assigned once at game start; elimination is one-way.

use serde::{Deserialize, Serialize};

/// Player identifier supporting up to 255 players.
///
/// Player indices are 0-based: the first seat is `PlayerId(0)`, and the
/// roster is stored in seat order so `id.index()` is its roster position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Seat number as shown to people (1-based).
    #[must_use]
    pub const fn seat(self) -> usize {
        self.0 as usize + 1
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use mr_white::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count.min(u8::MAX as usize + 1)).map(|i| PlayerId(i as u8))
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.seat())
    }
}

/// Secret role dealt to a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Knows the civilian word.
    Civilian,
    /// Knows a related but different word.
    Impostor,
    /// Knows no word at all.
    MrWhite,
}

impl Role {
    /// Human-readable role name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Role::Civilian => "Civilian",
            Role::Impostor => "Impostor",
            Role::MrWhite => "Mr. White",
        }
    }

    /// Short glyph used next to names.
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Role::Civilian => "👤",
            Role::Impostor => "🕵️",
            Role::MrWhite => "🤐",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Winning side of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    Civilians,
    Impostors,
    MrWhite,
}

impl Winner {
    /// End-screen headline.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Winner::Civilians => "👤 The Civilians win!",
            Winner::Impostors => "🕵️ The Impostors win!",
            Winner::MrWhite => "🤐 Mr. White guessed the word!",
        }
    }
}

impl std::fmt::Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Winner::Civilians => "Civilians",
            Winner::Impostors => "Impostors",
            Winner::MrWhite => "Mr. White",
        };
        f.write_str(name)
    }
}

/// One seat at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub role: Role,
    /// `None` for Mr. White.
    pub word: Option<String>,
    alive: bool,
}

impl Player {
    /// Create a living player with a dealt role.
    pub fn new(id: PlayerId, name: impl Into<String>, role: Role, word: Option<String>) -> Self {
        Self {
            id,
            name: name.into(),
            role,
            word,
            alive: true,
        }
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Mark the player dead. There is no way back.
    pub fn eliminate(&mut self) {
        self.alive = false;
    }

    /// Text of the secret card shown during distribution.
    #[must_use]
    pub fn card_text(&self) -> String {
        match (&self.role, &self.word) {
            (Role::MrWhite, _) | (_, None) => format!("{} {}\n(no word)", self.role.emoji(), self.role),
            (role, Some(word)) => format!("{} {}\nWord: {}", role.emoji(), role, word),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.seat(), 2);
        assert_eq!(format!("{}", p0), "Player 1");
    }

    #[test]
    fn test_player_id_all() {
        let players: Vec<_> = PlayerId::all(4).collect();
        assert_eq!(players, vec![PlayerId(0), PlayerId(1), PlayerId(2), PlayerId(3)]);
    }

    #[test]
    fn test_elimination_is_one_way() {
        let mut p = Player::new(PlayerId(0), "Alice", Role::Civilian, Some("Cat".into()));
        assert!(p.is_alive());
        p.eliminate();
        assert!(!p.is_alive());
        p.eliminate();
        assert!(!p.is_alive());
    }

    #[test]
    fn test_card_text() {
        let civ = Player::new(PlayerId(0), "A", Role::Civilian, Some("Cat".into()));
        let imp = Player::new(PlayerId(1), "B", Role::Impostor, Some("Dog".into()));
        let white = Player::new(PlayerId(2), "C", Role::MrWhite, None);

        assert!(civ.card_text().ends_with("Word: Cat"));
        assert!(imp.card_text().contains("Impostor"));
        assert!(white.card_text().contains("(no word)"));
    }

    #[test]
    fn test_player_serialization() {
        let p = Player::new(PlayerId(2), "Zoé", Role::MrWhite, None);
        let json = serde_json::to_string(&p).unwrap();
        let back: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
