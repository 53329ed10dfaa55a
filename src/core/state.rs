//! Game state for a single session at the table.
//!
//! ## Phase
//!
//! Where the game is in its cycle: card distribution, then rounds of
//! clues → voting → revelation, with an optional Mr. White guess, until
//! the game is over.
//!
//! ## GameState
//!
//! Roster, secret words, round counter, turn order, pending vote, guess
//! fallback, winner, and the game log. Owned by exactly one engine.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::player::{Player, PlayerId, Role, Winner};
use crate::rules::turns::TurnSequencer;
use crate::words::SecretWords;

/// Where the game currently is.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Passing the device so each player privately reads their card.
    Distribution { index: usize, revealed: bool },
    /// Between rounds (or before the first one).
    AwaitingRoundStart,
    /// Players give clues in speaking order.
    Clues,
    /// The table picks someone to eliminate.
    Voting,
    /// The eliminated player's role is shown; victory not yet evaluated.
    Revelation { eliminated: PlayerId },
    /// A Mr. White gets one attempt at the civilian word.
    Guess { guesser: PlayerId },
    GameOver,
}

impl Phase {
    /// Stable name used in logs and error messages.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Phase::Distribution { .. } => "distribution",
            Phase::AwaitingRoundStart => "awaiting round start",
            Phase::Clues => "clues",
            Phase::Voting => "voting",
            Phase::Revelation { .. } => "revelation",
            Phase::Guess { .. } => "guess",
            Phase::GameOver => "game over",
        }
    }
}

/// Something that happened, kept in the game log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    RoundStarted { round: u32, starter: Option<PlayerId> },
    Eliminated { round: u32, player: PlayerId, role: Role },
    GuessMade { guesser: PlayerId, correct: bool },
    GameEnded { winner: Winner },
}

/// How many living players hold each role.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleCounts {
    pub civilians: usize,
    pub impostors: usize,
    pub mr_whites: usize,
}

impl RoleCounts {
    /// Count living players by role.
    pub fn alive<'a>(players: impl IntoIterator<Item = &'a Player>) -> Self {
        let mut counts = Self::default();
        for p in players.into_iter().filter(|p| p.is_alive()) {
            match p.role {
                Role::Civilian => counts.civilians += 1,
                Role::Impostor => counts.impostors += 1,
                Role::MrWhite => counts.mr_whites += 1,
            }
        }
        counts
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.civilians + self.impostors + self.mr_whites
    }
}

/// Full state of one game.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Roster in seat order; `players[id.index()].id == id`.
    players: Vec<Player>,

    /// The chosen pair, already split into sides.
    pub words: SecretWords,

    /// Rounds started so far (0 before the first round).
    pub round: u32,

    /// Fixed circular order plus the next round's starting position.
    pub turns: TurnSequencer,

    pub phase: Phase,

    pub winner: Option<Winner>,

    /// Player selected in the voting phase, not yet submitted.
    pub pending_vote: Option<PlayerId>,

    /// Who wins if the current Mr. White guess misses. `None` means the
    /// game continues instead.
    pub guess_fallback: Option<Winner>,

    /// Game log.
    pub history: Vector<GameEvent>,
}

impl GameState {
    /// Create the state for a freshly dealt game.
    #[must_use]
    pub fn new(players: Vec<Player>, words: SecretWords, turns: TurnSequencer) -> Self {
        Self {
            players,
            words,
            round: 0,
            turns,
            phase: Phase::Distribution { index: 0, revealed: false },
            winner: None,
            pending_vote: None,
            guess_fallback: None,
            history: Vector::new(),
        }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// All players in seat order, dead or alive.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.get_mut(id.index())
    }

    #[must_use]
    pub fn is_alive(&self, id: PlayerId) -> bool {
        self.player(id).is_some_and(Player::is_alive)
    }

    /// Living players in seat order.
    pub fn alive_players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.is_alive())
    }

    #[must_use]
    pub fn alive_counts(&self) -> RoleCounts {
        RoleCounts::alive(&self.players)
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Append to the game log.
    pub fn record(&mut self, event: GameEvent) {
        self.history.push_back(event);
    }
}
