//! Circular speaking order.
//!
//! The order is fixed when the game is dealt: a random starter, then the
//! rest of the table in seat order, wrapping once. Only the pointer moves
//! afterwards, landing just after whoever was last eliminated.

use smallvec::SmallVec;

use crate::core::{GameRng, PlayerId};

/// Speaking order for one round. Inline for typical table sizes.
pub type SpeakingOrder = SmallVec<[PlayerId; 12]>;

/// Fixed circular turn order plus the next round's starting position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnSequencer {
    order: SmallVec<[PlayerId; 12]>,
    pointer: usize,
}

impl TurnSequencer {
    /// Pick a starter uniformly among `player_count` seats and build the
    /// circle from there.
    pub fn new(player_count: usize, rng: &mut GameRng) -> Self {
        let ids: SmallVec<[PlayerId; 12]> = PlayerId::all(player_count).collect();
        if ids.is_empty() {
            return Self { order: ids, pointer: 0 };
        }
        let start = rng.gen_range_usize(0..ids.len());
        let order = ids[start..].iter().chain(&ids[..start]).copied().collect();
        Self { order, pointer: 0 }
    }

    /// Build from an explicit order.
    pub fn from_order(order: Vec<PlayerId>, pointer: usize) -> Self {
        let pointer = if order.is_empty() { 0 } else { pointer % order.len() };
        Self {
            order: order.into_iter().collect(),
            pointer,
        }
    }

    /// The full circle, dead players included.
    #[must_use]
    pub fn order(&self) -> &[PlayerId] {
        &self.order
    }

    #[must_use]
    pub fn pointer(&self) -> usize {
        self.pointer
    }

    /// Whoever sits at the pointer, alive or not.
    #[must_use]
    pub fn starter(&self) -> Option<PlayerId> {
        self.order.get(self.pointer).copied()
    }

    /// Living players, walking once around the circle from the pointer.
    pub fn speaking_order(&self, is_alive: impl Fn(PlayerId) -> bool) -> SpeakingOrder {
        let len = self.order.len();
        (0..len)
            .map(|i| self.order[(self.pointer + i) % len])
            .filter(|&id| is_alive(id))
            .collect()
    }

    /// Move the pointer to the first living player after `eliminated`.
    ///
    /// Unknown ids leave the pointer alone. If nobody after `eliminated`
    /// is alive the pointer stops where the scan ended.
    pub fn advance_after_elimination(&mut self, eliminated: PlayerId, is_alive: impl Fn(PlayerId) -> bool) {
        let len = self.order.len();
        let Some(pos) = self.order.iter().position(|&id| id == eliminated) else {
            return;
        };

        self.pointer = (pos + 1) % len;
        for _ in 0..len {
            if is_alive(self.order[self.pointer]) {
                break;
            }
            self.pointer = (self.pointer + 1) % len;
        }
    }
}
