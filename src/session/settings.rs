//! Remembered player names and role counts between games.
//!
//! Stored as a small JSON blob. Reading is best effort: anything missing or
//! unreadable just means nothing was remembered.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::{GameConfig, SettingsError};

/// Storage key (and default file stem) of the settings blob.
pub const STORAGE_KEY: &str = "mrwhite_settings_v3";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub names: Vec<String>,
    pub config: GameConfig,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredConfig {
    player_count: Option<usize>,
    impostor_count: Option<usize>,
    mr_white_count: Option<usize>,
}

/// Read a settings blob field by field.
///
/// Returns `None` unless the text is a JSON object. Unknown or mistyped
/// fields fall back to defaults instead of discarding the rest.
#[must_use]
pub fn parse_settings(text: &str) -> Option<Settings> {
    let value: serde_json::Value = serde_json::from_str(text).ok()?;
    let object = value.as_object()?;

    let names: Vec<String> = object
        .get("names")
        .and_then(|v| v.as_array())
        .map(|items| items.iter().filter_map(|n| n.as_str().map(str::to_string)).collect())
        .unwrap_or_default();

    let defaults = GameConfig::default();
    let config = object
        .get("config")
        .filter(|v| v.is_object())
        .and_then(|v| serde_json::from_value::<StoredConfig>(v.clone()).ok())
        .map(|stored| GameConfig {
            player_count: stored.player_count.unwrap_or(defaults.player_count),
            impostor_count: stored.impostor_count.unwrap_or(defaults.impostor_count),
            mr_white_count: stored.mr_white_count.unwrap_or(defaults.mr_white_count),
        })
        .unwrap_or(defaults);

    Some(Settings { names, config })
}

/// Somewhere to keep settings.
pub trait SettingsStore {
    /// Remembered settings, if any could be read.
    fn load(&self) -> Option<Settings>;

    fn save(&mut self, settings: &Settings) -> Result<(), SettingsError>;
}

/// Settings in a JSON file.
#[derive(Clone, Debug)]
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl SettingsStore for FileSettingsStore {
    fn load(&self) -> Option<Settings> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "settings unreadable");
                return None;
            }
        };
        let settings = parse_settings(&text);
        if settings.is_none() {
            tracing::warn!(path = %self.path.display(), "settings corrupt, ignoring");
        }
        settings
    }

    fn save(&mut self, settings: &Settings) -> Result<(), SettingsError> {
        let text = serde_json::to_string_pretty(settings)?;
        std::fs::write(&self.path, text)?;
        Ok(())
    }
}

/// Settings kept in memory as the serialized blob.
#[derive(Clone, Debug, Default)]
pub struct MemorySettingsStore {
    pub blob: Option<String>,
}

impl MemorySettingsStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with raw stored text, e.g. something left by an older version.
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self { blob: Some(blob.into()) }
    }
}

impl SettingsStore for MemorySettingsStore {
    fn load(&self) -> Option<Settings> {
        self.blob.as_deref().and_then(parse_settings)
    }

    fn save(&mut self, settings: &Settings) -> Result<(), SettingsError> {
        self.blob = Some(serde_json::to_string(settings)?);
        Ok(())
    }
}
