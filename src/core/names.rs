//! Player display names.
//!
//! Names are trimmed, blank entries fall back to "Player N", and the roster
//! must be pairwise distinct once trimmed and case-folded.

use rustc_hash::FxHashSet;

use super::error::NameError;
use super::player::PlayerId;

/// Longest name kept, in characters.
pub const MAX_NAME_LEN: usize = 18;

/// Placeholder for seat `id`.
#[must_use]
pub fn default_name(id: PlayerId) -> String {
    format!("Player {}", id.seat())
}

/// Comparison key for a name: trimmed and case-folded.
#[must_use]
pub fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Trim, cap length, and fill blanks, then check names are distinct.
///
/// ```
/// use mr_white::core::names::resolve_names;
///
/// let names = resolve_names(&["  Alice ".into(), "".into(), "Bob".into()], 3).unwrap();
/// assert_eq!(names, vec!["Alice", "Player 2", "Bob"]);
///
/// assert!(resolve_names(&["Alice".into(), "alice ".into(), "Bob".into()], 3).is_err());
/// ```
pub fn resolve_names(raw: &[String], player_count: usize) -> Result<Vec<String>, NameError> {
    if raw.len() != player_count {
        return Err(NameError::WrongCount {
            expected: player_count,
            actual: raw.len(),
        });
    }

    let names: Vec<String> = raw
        .iter()
        .zip(PlayerId::all(player_count))
        .map(|(name, id)| {
            let trimmed: String = name.trim().chars().take(MAX_NAME_LEN).collect();
            let trimmed = trimmed.trim_end();
            if trimmed.is_empty() {
                default_name(id)
            } else {
                trimmed.to_string()
            }
        })
        .collect();

    validate_names(&names)?;
    Ok(names)
}

/// Reject rosters where two names collide after trim and case-fold.
pub fn validate_names(names: &[String]) -> Result<(), NameError> {
    let mut seen = FxHashSet::default();
    for name in names {
        if !seen.insert(normalize(name)) {
            return Err(NameError::Duplicate {
                name: name.trim().to_string(),
            });
        }
    }
    Ok(())
}

/// Resize remembered names to `player_count`, padding with placeholders.
#[must_use]
pub fn fit_saved_names(saved: &[String], player_count: usize) -> Vec<String> {
    PlayerId::all(player_count)
        .map(|id| {
            saved
                .get(id.index())
                .filter(|n| !n.trim().is_empty())
                .cloned()
                .unwrap_or_else(|| default_name(id))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_blank_names_get_defaults() {
        let names = resolve_names(&strings(&["", "  ", "Cid"]), 3).unwrap();
        assert_eq!(names, strings(&["Player 1", "Player 2", "Cid"]));
    }

    #[test]
    fn test_duplicate_case_insensitive() {
        let err = resolve_names(&strings(&["Alice", "alice ", "Bob"]), 3).unwrap_err();
        assert_eq!(err, NameError::Duplicate { name: "alice".into() });
    }

    #[test]
    fn test_default_can_collide_with_typed_name() {
        assert!(resolve_names(&strings(&["player 2", "", "Bob"]), 3).is_err());
    }

    #[test]
    fn test_wrong_count() {
        let err = resolve_names(&strings(&["A", "B"]), 3).unwrap_err();
        assert_eq!(err, NameError::WrongCount { expected: 3, actual: 2 });
    }

    #[test]
    fn test_long_names_are_capped() {
        let names = resolve_names(&strings(&["abcdefghijklmnopqrstuvwxyz", "B", "C"]), 3).unwrap();
        assert_eq!(names[0].chars().count(), MAX_NAME_LEN);
    }

    #[test]
    fn test_fit_saved_names() {
        let saved = strings(&["Ana", "Ben", "Cid", "Dee"]);
        assert_eq!(fit_saved_names(&saved, 3), strings(&["Ana", "Ben", "Cid"]));
        assert_eq!(
            fit_saved_names(&saved[..2], 4),
            strings(&["Ana", "Ben", "Player 3", "Player 4"])
        );
    }
}
