//! Word pairs and how one is picked for a game.

use serde::{Deserialize, Serialize};

use crate::core::GameRng;

/// Two related words that differ case-insensitively.
///
/// Which one the civilians get is decided per game by a coin flip.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordPair {
    a: String,
    b: String,
}

impl WordPair {
    /// Build a pair, trimming both words.
    ///
    /// Returns `None` if either word is blank or both are the same word
    /// ignoring case.
    ///
    /// ```
    /// use mr_white::words::WordPair;
    ///
    /// assert!(WordPair::new("Cat", "Dog").is_some());
    /// assert!(WordPair::new("Cat", " cat ").is_none());
    /// assert!(WordPair::new("", "Dog").is_none());
    /// ```
    #[must_use]
    pub fn new(a: &str, b: &str) -> Option<Self> {
        let (a, b) = (a.trim(), b.trim());
        if a.is_empty() || b.is_empty() || a.to_lowercase() == b.to_lowercase() {
            return None;
        }
        Some(Self {
            a: a.to_string(),
            b: b.to_string(),
        })
    }

    #[must_use]
    pub fn words(&self) -> (&str, &str) {
        (&self.a, &self.b)
    }
}

/// The chosen pair split into sides.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretWords {
    pub civilian: String,
    pub impostor: String,
}

impl SecretWords {
    /// Pick one pair uniformly, then flip a fair coin for which side is
    /// the civilian word. Falls back to the built-in list when `pairs`
    /// is empty.
    pub fn choose(pairs: &[WordPair], rng: &GameRng) -> Self {
        let fallback;
        let pairs = if pairs.is_empty() {
            fallback = fallback_pairs();
            &fallback[..]
        } else {
            pairs
        };

        let mut pick = rng.for_context("pair");
        let mut side = rng.for_context("side");
        let index = pick.gen_range_usize(0..pairs.len());
        let (a, b) = pairs[index].words();

        if side.gen_bool(0.5) {
            Self { civilian: a.to_string(), impostor: b.to_string() }
        } else {
            Self { civilian: b.to_string(), impostor: a.to_string() }
        }
    }
}

/// Built-in pairs used when no word list can be loaded.
#[must_use]
pub fn fallback_pairs() -> Vec<WordPair> {
    [("Fanta", "Coca"), ("Cat", "Dog"), ("Pizza", "Burger")]
        .iter()
        .filter_map(|(a, b)| WordPair::new(a, b))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_trims() {
        let pair = WordPair::new("  Tea ", "Coffee\n").unwrap();
        assert_eq!(pair.words(), ("Tea", "Coffee"));
    }

    #[test]
    fn test_fallback_has_three_distinct_pairs() {
        let pairs = fallback_pairs();
        assert_eq!(pairs.len(), 3);
        for pair in &pairs {
            let (a, b) = pair.words();
            assert_ne!(a.to_lowercase(), b.to_lowercase());
        }
    }

    #[test]
    fn test_choose_words_differ() {
        let pairs = fallback_pairs();
        for seed in 0..50 {
            let words = SecretWords::choose(&pairs, &GameRng::new(seed));
            assert_ne!(words.civilian.to_lowercase(), words.impostor.to_lowercase());
        }
    }

    #[test]
    fn test_both_sides_happen() {
        let pairs = vec![WordPair::new("Sun", "Moon").unwrap()];
        let mut civilian_sun = 0;
        for seed in 0..200 {
            if SecretWords::choose(&pairs, &GameRng::new(seed)).civilian == "Sun" {
                civilian_sun += 1;
            }
        }
        assert!((50..=150).contains(&civilian_sun), "coin flip skewed: {}", civilian_sun);
    }

    #[test]
    fn test_empty_list_uses_fallback() {
        let words = SecretWords::choose(&[], &GameRng::new(1));
        let fallback = fallback_pairs();
        assert!(fallback.iter().any(|p| {
            let (a, b) = p.words();
            (a == words.civilian && b == words.impostor) || (b == words.civilian && a == words.impostor)
        }));
    }
}
