//! Deferred phase transitions.
//!
//! The table needs a moment to take in a reveal before the game moves on.
//! Instead of fire-and-forget timers the engine hands out a ticket for the
//! one pending transition; the caller waits `delay` and fires it. Anything
//! that moves the game first makes the ticket stale.

use std::time::Duration;

use crate::core::InvalidAction;

/// Pause between the elimination reveal and the victory check.
pub const REVEAL_DELAY: Duration = Duration::from_millis(800);

/// Pause before the next round starts.
pub const NEXT_ROUND_DELAY: Duration = Duration::from_millis(700);

/// Identifies one scheduled transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ticket(pub u64);

/// A transition the engine performs when its ticket is fired.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Evaluate victory after the reveal.
    ResolveRevelation,
    /// Start the next round.
    StartRound,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scheduled {
    pub ticket: Ticket,
    pub transition: Transition,
    pub delay: Duration,
}

/// Holds at most one pending transition.
#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    next_ticket: u64,
    pending: Option<Scheduled>,
}

impl Scheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace whatever is pending with `transition`.
    pub fn schedule(&mut self, transition: Transition, delay: Duration) -> Scheduled {
        self.next_ticket += 1;
        let scheduled = Scheduled {
            ticket: Ticket(self.next_ticket),
            transition,
            delay,
        };
        self.pending = Some(scheduled);
        scheduled
    }

    #[must_use]
    pub fn pending(&self) -> Option<Scheduled> {
        self.pending
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Claim the transition for `ticket` if it is still the pending one.
    pub fn take(&mut self, ticket: Ticket) -> Result<Transition, InvalidAction> {
        match self.pending {
            Some(s) if s.ticket == ticket => {
                self.pending = None;
                Ok(s.transition)
            }
            _ => Err(InvalidAction::StaleTicket(ticket.0)),
        }
    }
}
