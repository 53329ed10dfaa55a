//! Victory conditions and the Mr. White guess.
//!
//! A tie between Impostors and Civilians goes to the Impostors.

use crate::core::{Player, PlayerId, Role, RoleCounts, Winner};

/// What happens after an elimination has been revealed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// `guesser` gets one try at the civilian word. On a miss, `fallback`
    /// wins, or the game continues when it is `None`.
    Guess {
        guesser: PlayerId,
        fallback: Option<Winner>,
    },
    Win(Winner),
    Continue,
}

/// Decide the outcome after `eliminated` has been voted out.
///
/// `players` is the full roster with `eliminated` already marked dead.
pub fn evaluate(eliminated: &Player, players: &[Player]) -> Verdict {
    if eliminated.role == Role::MrWhite {
        return Verdict::Guess {
            guesser: eliminated.id,
            fallback: None,
        };
    }

    let alive = RoleCounts::alive(players);

    if alive.impostors == 0 && alive.mr_whites == 0 {
        return Verdict::Win(Winner::Civilians);
    }

    if alive.impostors >= alive.civilians {
        let stealer = players
            .iter()
            .find(|p| p.is_alive() && p.role == Role::MrWhite);
        return match stealer {
            Some(mr_white) => Verdict::Guess {
                guesser: mr_white.id,
                fallback: Some(Winner::Impostors),
            },
            None => Verdict::Win(Winner::Impostors),
        };
    }

    Verdict::Continue
}

/// Compare a guess with the civilian word, ignoring surrounding space and case.
#[must_use]
pub fn guess_matches(guess: &str, civilian_word: &str) -> bool {
    guess.trim().to_lowercase() == civilian_word.trim().to_lowercase()
}
