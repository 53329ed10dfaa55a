//! Word pairs: the external word list, its fallback, and per-game choice.

pub mod pairs;
pub mod source;

pub use pairs::{fallback_pairs, SecretWords, WordPair};
pub use source::{load_word_pairs, parse_pairs, InlineSource, JsonFileSource, LoadStatus, LoadedPairs, WordPairSource};
