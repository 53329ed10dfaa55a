//! Loading word pairs from a JSON word list.
//!
//! The list is an array of `{ "a": "...", "b": "..." }` objects. Malformed
//! entries and pairs of identical words are dropped; if nothing usable is
//! left the built-in list is used and the status says so.

use std::path::PathBuf;

use serde::Deserialize;

use super::pairs::{fallback_pairs, WordPair};
use crate::core::WordSourceError;

/// Where word-list text comes from.
pub trait WordPairSource {
    /// Fetch the raw JSON text.
    fn fetch(&self) -> Result<String, WordSourceError>;
}

/// Word list stored in a file.
#[derive(Clone, Debug)]
pub struct JsonFileSource {
    pub path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl WordPairSource for JsonFileSource {
    fn fetch(&self) -> Result<String, WordSourceError> {
        Ok(std::fs::read_to_string(&self.path)?)
    }
}

/// Word list held in memory.
#[derive(Clone, Debug)]
pub struct InlineSource(pub String);

impl WordPairSource for InlineSource {
    fn fetch(&self) -> Result<String, WordSourceError> {
        Ok(self.0.clone())
    }
}

#[derive(Deserialize)]
struct RawPair {
    a: String,
    b: String,
}

/// Parse word-list JSON, keeping only well-formed distinct pairs.
pub fn parse_pairs(text: &str) -> Result<Vec<WordPair>, WordSourceError> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    let pairs: Vec<WordPair> = match value {
        serde_json::Value::Array(entries) => entries
            .into_iter()
            .filter_map(|entry| serde_json::from_value::<RawPair>(entry).ok())
            .filter_map(|raw| WordPair::new(&raw.a, &raw.b))
            .collect(),
        _ => Vec::new(),
    };

    if pairs.is_empty() {
        return Err(WordSourceError::Empty);
    }
    Ok(pairs)
}

/// Outcome of loading the word list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadStatus {
    Loaded { count: usize },
    Fallback { reason: String },
}

impl LoadStatus {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        matches!(self, LoadStatus::Loaded { .. })
    }

    /// Status line for the start screen.
    #[must_use]
    pub fn info(&self) -> String {
        match self {
            LoadStatus::Loaded { count } => format!("✅ {} word pairs loaded", count),
            LoadStatus::Fallback { reason } => format!("⚠️ Word list not loaded ({}), using built-in pairs", reason),
        }
    }
}

/// Pairs ready for play plus how they were obtained.
#[derive(Clone, Debug)]
pub struct LoadedPairs {
    pub pairs: Vec<WordPair>,
    pub status: LoadStatus,
}

/// Fetch and parse the word list, substituting the built-in pairs on any
/// failure.
pub fn load_word_pairs(source: &dyn WordPairSource) -> LoadedPairs {
    match source.fetch().and_then(|text| parse_pairs(&text)) {
        Ok(pairs) => {
            tracing::debug!(count = pairs.len(), "word list loaded");
            LoadedPairs {
                status: LoadStatus::Loaded { count: pairs.len() },
                pairs,
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "word list not loaded, using fallback");
            LoadedPairs {
                pairs: fallback_pairs(),
                status: LoadStatus::Fallback { reason: e.to_string() },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_filters_bad_entries() {
        let text = r#"[
            {"a": "Cat", "b": "Dog"},
            {"a": "Tea"},
            {"a": "Sun", "b": " sun "},
            {"a": 3, "b": "x"},
            null,
            {"a": " Pizza ", "b": "Burger"}
        ]"#;
        let pairs = parse_pairs(text).unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[1].words(), ("Pizza", "Burger"));
    }

    #[test]
    fn test_empty_array_is_error() {
        assert!(matches!(parse_pairs("[]"), Err(WordSourceError::Empty)));
    }

    #[test]
    fn test_non_array_is_error() {
        assert!(matches!(parse_pairs(r#"{"a":"x","b":"y"}"#), Err(WordSourceError::Empty)));
    }

    #[test]
    fn test_load_success() {
        let loaded = load_word_pairs(&InlineSource(r#"[{"a":"Cat","b":"Dog"}]"#.into()));
        assert!(loaded.status.is_ok());
        assert_eq!(loaded.status, LoadStatus::Loaded { count: 1 });
        assert_eq!(loaded.pairs.len(), 1);
    }

    #[test]
    fn test_load_empty_falls_back() {
        let loaded = load_word_pairs(&InlineSource("[]".into()));
        assert!(!loaded.status.is_ok());
        assert!(loaded.pairs.len() >= 3);
    }

    #[test]
    fn test_load_malformed_falls_back() {
        let loaded = load_word_pairs(&InlineSource("[{\"a\": ".into()));
        assert!(!loaded.status.is_ok());
        assert!(loaded.pairs.len() >= 3);
        assert!(loaded.status.info().starts_with("⚠️"));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let source = JsonFileSource::new("/definitely/not/here/words.json");
        let loaded = load_word_pairs(&source);
        assert!(matches!(loaded.status, LoadStatus::Fallback { .. }));
    }
}
