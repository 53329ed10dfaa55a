//! Read-only projection of a game for whatever draws the screen.
//!
//! [`project`] is a pure function of the engine; front ends render the
//! resulting [`GameView`] and send actions back to the engine.

use serde::Serialize;

use crate::core::{Phase, PlayerId, Role, RoleCounts, Winner};
use crate::rules::RoundEngine;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameView {
    pub stats: StatsView,
    pub screen: Screen,
}

/// Header line: round and who is left.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StatsView {
    pub round: u32,
    pub alive: usize,
    pub counts: RoleCounts,
}

impl StatsView {
    #[must_use]
    pub fn title(&self) -> String {
        format!("Round {}", self.round)
    }

    #[must_use]
    pub fn line(&self) -> String {
        format!(
            "👥 {} alive • 👤 {} • 🕵️ {} • 🤐 {}",
            self.alive, self.counts.civilians, self.counts.impostors, self.counts.mr_whites
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ClueLine {
    /// 1-based speaking position.
    pub position: usize,
    pub name: String,
    pub clue: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VoteTarget {
    pub id: PlayerId,
    pub name: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResultRow {
    pub name: String,
    pub role: Role,
    pub alive: bool,
}

/// End screen. Only the civilian word is revealed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EndSummary {
    pub winner: Winner,
    pub message: &'static str,
    pub players: Vec<ResultRow>,
    pub civilian_word: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Screen {
    /// Secret card for the player holding the device; `card` is `None`
    /// until they reveal it.
    Card {
        name: String,
        position: usize,
        total: usize,
        card: Option<String>,
    },
    AwaitingRoundStart,
    Clues { lines: Vec<ClueLine> },
    Voting { targets: Vec<VoteTarget>, can_submit: bool },
    /// The eliminated player's role. Their word stays hidden.
    Revelation { name: String, role: Role, word: &'static str },
    Guess { guesser: String, steal: bool },
    GameOver(EndSummary),
}

/// Project the engine's current state into a view.
pub fn project(engine: &RoundEngine) -> GameView {
    let state = engine.state();
    let name_of = |id: PlayerId| state.player(id).map(|p| p.name.clone()).unwrap_or_default();

    let screen = match state.phase {
        Phase::Distribution { index, revealed } => {
            let holder = state.player(PlayerId(index as u8));
            Screen::Card {
                name: holder.map(|p| p.name.clone()).unwrap_or_default(),
                position: index + 1,
                total: state.player_count(),
                card: holder.filter(|_| revealed).map(|p| p.card_text()),
            }
        }
        Phase::AwaitingRoundStart => Screen::AwaitingRoundStart,
        Phase::Clues => Screen::Clues {
            lines: engine
                .clues()
                .iter()
                .enumerate()
                .map(|(i, c)| ClueLine {
                    position: i + 1,
                    name: name_of(c.player),
                    clue: c.text,
                })
                .collect(),
        },
        Phase::Voting => Screen::Voting {
            targets: engine
                .vote_targets()
                .into_iter()
                .map(|id| VoteTarget {
                    id,
                    name: name_of(id),
                    selected: state.pending_vote == Some(id),
                })
                .collect(),
            can_submit: state.pending_vote.is_some(),
        },
        Phase::Revelation { eliminated } => {
            let role = state.player(eliminated).map_or(Role::Civilian, |p| p.role);
            Screen::Revelation {
                name: name_of(eliminated),
                role,
                word: if role == Role::MrWhite { "(no word)" } else { "(hidden)" },
            }
        }
        Phase::Guess { guesser } => Screen::Guess {
            guesser: name_of(guesser),
            steal: state.guess_fallback.is_some(),
        },
        Phase::GameOver => match end_summary(engine) {
            Some(summary) => Screen::GameOver(summary),
            None => Screen::AwaitingRoundStart,
        },
    };

    GameView {
        stats: StatsView {
            round: state.round,
            alive: state.alive_players().count(),
            counts: state.alive_counts(),
        },
        screen,
    }
}

/// The end screen, once there is a winner.
pub fn end_summary(engine: &RoundEngine) -> Option<EndSummary> {
    let state = engine.state();
    let winner = state.winner?;
    Some(EndSummary {
        winner,
        message: winner.message(),
        players: state
            .players()
            .iter()
            .map(|p| ResultRow {
                name: p.name.clone(),
                role: p.role,
                alive: p.is_alive(),
            })
            .collect(),
        civilian_word: state.words.civilian.clone(),
    })
}
