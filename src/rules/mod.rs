//! Game rules.
//!
//! - `roles`: dealing roles and words
//! - `turns`: circular speaking order
//! - `clues`: cosmetic clue text
//! - `victory`: win conditions and the Mr. White guess
//! - `schedule`: deferred transitions
//! - `engine`: the round state machine tying them together

pub mod clues;
pub mod engine;
pub mod roles;
pub mod schedule;
pub mod turns;
pub mod victory;

pub use clues::generate_clue;
pub use engine::{GameBuilder, RoundEngine, SpokenClue};
pub use roles::{deal_roles, Deal};
pub use schedule::{Scheduled, Ticket, Transition, NEXT_ROUND_DELAY, REVEAL_DELAY};
pub use turns::{SpeakingOrder, TurnSequencer};
pub use victory::{guess_matches, Verdict};
