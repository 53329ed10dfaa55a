//! Flavor text shown next to each speaker. Purely cosmetic.

use crate::core::{GameRng, Role};

const MR_WHITE_CLUES: [&str; 5] = [
    "Hmm… interesting.",
    "I see the idea, but I'm not sure…",
    "That rings a bell…",
    "It's a bit vague…",
    "Okay… noted.",
];

const IMPOSTOR_CLUES: [&str; 5] = [
    "It's very well known.",
    "You can find it easily.",
    "Lots of people like it.",
    "People have it often.",
    "Goes well with a break.",
];

const CIVILIAN_CLUES: [&str; 5] = [
    "It has a strong identity.",
    "Easy to recognize.",
    "It brings a color or a style to mind.",
    "It's fairly popular.",
    "It's simple to describe.",
];

/// The five clues available to `role`.
#[must_use]
pub fn clues_for(role: Role) -> &'static [&'static str; 5] {
    match role {
        Role::MrWhite => &MR_WHITE_CLUES,
        Role::Impostor => &IMPOSTOR_CLUES,
        Role::Civilian => &CIVILIAN_CLUES,
    }
}

/// Draw one clue for `role` uniformly.
pub fn generate_clue(role: Role, rng: &mut GameRng) -> &'static str {
    let clues = clues_for(role);
    clues[rng.gen_range_usize(0..clues.len())]
}
