//! The round engine: the game's state machine.
//!
//! ```text
//! Distribution → AwaitingRoundStart → Clues → Voting → Revelation
//!                       ↑                                  │
//!                       └──── continue ──── Guess ←────────┤
//!                                             │            │
//!                                             └→ GameOver ←┘
//! ```
//!
//! Mutators return `Err(InvalidAction)` and leave state untouched when an
//! action does not apply; callers wired to a correct UI may ignore it.
//! Timed pauses are exposed as a single pending [`Scheduled`] transition.

use tracing::{debug, info};

use super::clues::generate_clue;
use super::roles::deal_roles;
use super::schedule::{Scheduled, Scheduler, Ticket, Transition, NEXT_ROUND_DELAY, REVEAL_DELAY};
use super::turns::{SpeakingOrder, TurnSequencer};
use super::victory::{self, guess_matches, Verdict};
use crate::core::names::{default_name, resolve_names};
use crate::core::{
    GameConfig, GameEvent, GameRng, GameState, InvalidAction, Phase, Player, PlayerId, SessionError, Winner,
};
use crate::words::{SecretWords, WordPair};

/// One line of the clue phase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpokenClue {
    pub player: PlayerId,
    pub text: &'static str,
}

/// Builder for dealing a new game.
pub struct GameBuilder {
    config: GameConfig,
    names: Vec<String>,
    pairs: Vec<WordPair>,
}

impl GameBuilder {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            names: Vec::new(),
            pairs: Vec::new(),
        }
    }

    /// Display names in seat order. Missing names become "Player N".
    #[must_use]
    pub fn names(mut self, names: Vec<String>) -> Self {
        self.names = names;
        self
    }

    /// Word pairs to pick from. Empty means the built-in list.
    #[must_use]
    pub fn pairs(mut self, pairs: Vec<WordPair>) -> Self {
        self.pairs = pairs;
        self
    }

    /// Validate, pick words, deal roles, and choose the starting player.
    pub fn build(self, rng: &GameRng) -> Result<RoundEngine, SessionError> {
        let config = self.config;
        config.validate()?;

        let mut names = self.names;
        names.truncate(config.player_count);
        names.extend(PlayerId::all(config.player_count).skip(names.len()).map(default_name));
        let names = resolve_names(&names, config.player_count)?;

        let words = SecretWords::choose(&self.pairs, rng);
        let deck = deal_roles(&config, &words, &mut rng.for_context("roles"));
        let players = PlayerId::all(config.player_count)
            .zip(names)
            .zip(deck)
            .map(|((id, name), deal)| Player::new(id, name, deal.role, deal.word))
            .collect();
        let turns = TurnSequencer::new(config.player_count, &mut rng.for_context("starter"));

        info!(
            players = config.player_count,
            impostors = config.impostor_count,
            mr_whites = config.mr_white_count,
            starter = ?turns.starter(),
            "game dealt"
        );

        Ok(RoundEngine {
            config,
            state: GameState::new(players, words, turns),
            clue_rng: rng.for_context("clues"),
            scheduler: Scheduler::new(),
            clues: Vec::new(),
        })
    }
}

/// Drives one game from card distribution to the end screen.
#[derive(Clone, Debug)]
pub struct RoundEngine {
    config: GameConfig,
    state: GameState,
    clue_rng: GameRng,
    scheduler: Scheduler,
    /// Speaking order and clues of the current round.
    clues: Vec<SpokenClue>,
}

impl RoundEngine {
    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.state.phase
    }

    #[must_use]
    pub fn round(&self) -> u32 {
        self.state.round
    }

    #[must_use]
    pub fn winner(&self) -> Option<Winner> {
        self.state.winner
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// Living players in turn order from the current pointer.
    #[must_use]
    pub fn speaking_order(&self) -> SpeakingOrder {
        let state = &self.state;
        state.turns.speaking_order(|id| state.is_alive(id))
    }

    /// Clues of the current round, in speaking order.
    #[must_use]
    pub fn clues(&self) -> &[SpokenClue] {
        &self.clues
    }

    /// Everyone who can be voted for: living players in seat order.
    #[must_use]
    pub fn vote_targets(&self) -> Vec<PlayerId> {
        self.state.alive_players().map(|p| p.id).collect()
    }

    /// The transition waiting on a delay, if any.
    #[must_use]
    pub fn pending_transition(&self) -> Option<Scheduled> {
        self.scheduler.pending()
    }

    fn wrong_phase(&self, action: &'static str) -> InvalidAction {
        let err = InvalidAction::WrongPhase {
            action,
            phase: self.state.phase.name(),
        };
        debug!(%err, "action rejected");
        err
    }

    // === Card distribution ===

    /// Show the current holder's secret card.
    pub fn reveal_card(&mut self) -> Result<&Player, InvalidAction> {
        let Phase::Distribution { index, .. } = self.state.phase else {
            return Err(self.wrong_phase("reveal card"));
        };
        self.state.phase = Phase::Distribution { index, revealed: true };
        self.state
            .player(PlayerId(index as u8))
            .ok_or(InvalidAction::UnknownPlayer(PlayerId(index as u8)))
    }

    /// Pass the device on. After the last card the first round can start.
    pub fn next_card(&mut self) -> Result<(), InvalidAction> {
        let Phase::Distribution { index, revealed } = self.state.phase else {
            return Err(self.wrong_phase("next card"));
        };
        if !revealed {
            return Err(InvalidAction::CardNotRevealed);
        }

        let next = index + 1;
        self.state.phase = if next < self.state.player_count() {
            Phase::Distribution { index: next, revealed: false }
        } else {
            debug!("all cards seen");
            Phase::AwaitingRoundStart
        };
        Ok(())
    }

    // === Rounds ===

    /// Begin a round: bump the counter, fix the speaking order, draw clues.
    ///
    /// Calling it again during the same clue phase returns the same round
    /// unchanged.
    pub fn start_round(&mut self) -> Result<&[SpokenClue], InvalidAction> {
        match self.state.phase {
            Phase::Clues => return Ok(&self.clues),
            Phase::AwaitingRoundStart => {}
            _ => return Err(self.wrong_phase("start round")),
        }

        self.scheduler.cancel();
        self.state.round += 1;
        self.state.pending_vote = None;

        let order = self.speaking_order();
        let state = &self.state;
        let rng = &mut self.clue_rng;
        self.clues = order
            .iter()
            .filter_map(|&id| state.player(id))
            .map(|p| SpokenClue {
                player: p.id,
                text: generate_clue(p.role, rng),
            })
            .collect();

        let round = self.state.round;
        let starter = order.first().copied();
        self.state.record(GameEvent::RoundStarted { round, starter });
        self.state.phase = Phase::Clues;
        debug!(round, ?starter, speakers = order.len(), "round started");
        Ok(&self.clues)
    }

    /// Close the clue phase and open voting.
    pub fn advance_to_voting(&mut self) -> Result<Vec<PlayerId>, InvalidAction> {
        match self.state.phase {
            Phase::Clues | Phase::Voting => {}
            _ => return Err(self.wrong_phase("advance to voting")),
        }
        self.state.phase = Phase::Voting;
        Ok(self.vote_targets())
    }

    /// Mark `player` as the table's choice. Does not end the vote.
    pub fn select_vote(&mut self, player: PlayerId) -> Result<(), InvalidAction> {
        if self.state.phase != Phase::Voting {
            return Err(self.wrong_phase("select vote"));
        }
        match self.state.player(player) {
            None => return Err(InvalidAction::UnknownPlayer(player)),
            Some(p) if !p.is_alive() => return Err(InvalidAction::NotAlive(player)),
            Some(_) => {}
        }
        self.state.pending_vote = Some(player);
        Ok(())
    }

    /// Eliminate the selected player and reveal their role.
    ///
    /// Victory is evaluated when the returned reveal delay has passed
    /// (see [`RoundEngine::fire`]) or when the table continues early.
    pub fn submit_vote(&mut self) -> Result<Scheduled, InvalidAction> {
        if self.state.phase != Phase::Voting {
            return Err(self.wrong_phase("submit vote"));
        }
        let Some(target) = self.state.pending_vote else {
            debug!("submit vote without selection");
            return Err(InvalidAction::NoVoteSelected);
        };
        let round = self.state.round;
        let Some(player) = self.state.player_mut(target) else {
            return Err(InvalidAction::UnknownPlayer(target));
        };

        player.eliminate();
        let role = player.role;
        info!(round, player = %player.name, ?role, "player eliminated");

        let state = &mut self.state;
        let alive: Vec<bool> = state.players().iter().map(Player::is_alive).collect();
        state
            .turns
            .advance_after_elimination(target, |id| alive.get(id.index()).copied().unwrap_or(false));

        state.pending_vote = None;
        state.record(GameEvent::Eliminated {
            round: state.round,
            player: target,
            role,
        });
        state.phase = Phase::Revelation { eliminated: target };

        Ok(self.scheduler.schedule(Transition::ResolveRevelation, REVEAL_DELAY))
    }

    /// Apply the victory rules to the player just revealed.
    pub fn evaluate_victory(&mut self) -> Result<Verdict, InvalidAction> {
        let Phase::Revelation { eliminated } = self.state.phase else {
            return Err(self.wrong_phase("evaluate victory"));
        };
        let Some(player) = self.state.player(eliminated) else {
            return Err(InvalidAction::UnknownPlayer(eliminated));
        };

        self.scheduler.cancel();
        let verdict = victory::evaluate(player, self.state.players());
        debug!(?verdict, "victory evaluated");

        match verdict {
            Verdict::Guess { guesser, fallback } => {
                self.state.guess_fallback = fallback;
                self.state.phase = Phase::Guess { guesser };
            }
            Verdict::Win(winner) => self.end_game(winner),
            Verdict::Continue => self.continue_game(),
        }
        Ok(verdict)
    }

    /// Mr. White's attempt at the civilian word.
    ///
    /// Returns whether the guess was right.
    pub fn submit_guess(&mut self, guess: &str) -> Result<bool, InvalidAction> {
        let Phase::Guess { guesser } = self.state.phase else {
            return Err(self.wrong_phase("submit guess"));
        };

        let correct = guess_matches(guess, &self.state.words.civilian);
        self.state.record(GameEvent::GuessMade { guesser, correct });
        let fallback = self.state.guess_fallback.take();
        info!(?guesser, correct, "mr white guessed");

        match (correct, fallback) {
            (true, _) => self.end_game(Winner::MrWhite),
            (false, Some(winner)) => self.end_game(winner),
            (false, None) => self.continue_game(),
        }
        Ok(correct)
    }

    /// Move on without waiting for a scheduled pause.
    ///
    /// During a reveal this evaluates victory first; if the game goes on,
    /// the next round starts immediately.
    pub fn continue_after_round(&mut self) -> Result<(), InvalidAction> {
        if matches!(self.state.phase, Phase::Revelation { .. }) {
            self.evaluate_victory()?;
        }
        match self.state.phase {
            Phase::AwaitingRoundStart => self.start_round().map(|_| ()),
            Phase::Guess { .. } | Phase::GameOver => Ok(()),
            _ => Err(self.wrong_phase("continue")),
        }
    }

    /// Perform the scheduled transition for `ticket`.
    pub fn fire(&mut self, ticket: Ticket) -> Result<(), InvalidAction> {
        let transition = self.scheduler.take(ticket).map_err(|err| {
            debug!(%err, "stale ticket");
            err
        })?;
        match transition {
            Transition::ResolveRevelation => self.evaluate_victory().map(|_| ()),
            Transition::StartRound => self.start_round().map(|_| ()),
        }
    }

    /// Fire whatever is pending, skipping the wait.
    pub fn fire_pending(&mut self) -> Result<(), InvalidAction> {
        match self.scheduler.pending() {
            Some(s) => self.fire(s.ticket),
            None => Err(InvalidAction::StaleTicket(0)),
        }
    }

    fn continue_game(&mut self) {
        self.state.pending_vote = None;
        self.state.guess_fallback = None;
        self.state.phase = Phase::AwaitingRoundStart;
        self.scheduler.schedule(Transition::StartRound, NEXT_ROUND_DELAY);
    }

    fn end_game(&mut self, winner: Winner) {
        self.scheduler.cancel();
        self.state.winner = Some(winner);
        self.state.guess_fallback = None;
        self.state.pending_vote = None;
        self.state.phase = Phase::GameOver;
        self.state.record(GameEvent::GameEnded { winner });
        info!(%winner, round = self.state.round, "game over");
    }
}
