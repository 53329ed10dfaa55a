//! A session at the table: setup screens and the game in progress.
//!
//! `GameSession` owns everything that outlives a single game: the loaded
//! word pairs, the config being edited, remembered names, and the settings
//! store. It deals a new [`RoundEngine`] each time names are confirmed.

pub mod settings;

pub use settings::{parse_settings, FileSettingsStore, MemorySettingsStore, Settings, SettingsStore, STORAGE_KEY};

use tracing::{debug, warn};

use crate::core::names::{fit_saved_names, resolve_names};
use crate::core::{ConfigError, GameConfig, GameRng, SessionError};
use crate::rules::{GameBuilder, RoundEngine};
use crate::words::{load_word_pairs, LoadStatus, LoadedPairs, WordPairSource};

pub struct GameSession<S: SettingsStore> {
    store: S,
    rng: GameRng,
    words: Option<LoadedPairs>,
    config: GameConfig,
    saved_names: Vec<String>,
    games_dealt: u64,
    game: Option<RoundEngine>,
}

impl<S: SettingsStore> GameSession<S> {
    /// Open a session, restoring whatever the store remembers.
    pub fn new(store: S, rng: GameRng) -> Self {
        let saved = store.load().unwrap_or_default();
        debug!(names = saved.names.len(), config = ?saved.config, "settings restored");
        Self {
            store,
            rng,
            words: None,
            config: saved.config,
            saved_names: saved.names,
            games_dealt: 0,
            game: None,
        }
    }

    /// Load the word list the first time it is needed.
    ///
    /// Later calls return the cached status without fetching again.
    pub fn load_words(&mut self, source: &dyn WordPairSource) -> &LoadStatus {
        &self.words.get_or_insert_with(|| load_word_pairs(source)).status
    }

    #[must_use]
    pub fn word_status(&self) -> Option<&LoadStatus> {
        self.words.as_ref().map(|w| &w.status)
    }

    #[must_use]
    pub fn config(&self) -> GameConfig {
        self.config
    }

    /// Record the config being edited and check it.
    ///
    /// The config is kept even when invalid so the form keeps its values;
    /// the error blocks moving on to names.
    pub fn set_config(&mut self, config: GameConfig) -> Result<(), ConfigError> {
        self.config = config;
        config.validate()
    }

    /// Names to pre-fill for the current config.
    pub fn name_slots(&mut self) -> Result<Vec<String>, ConfigError> {
        self.config.validate()?;
        self.saved_names = fit_saved_names(&self.saved_names, self.config.player_count);
        Ok(self.saved_names.clone())
    }

    /// Confirm names, remember them, and deal a new game.
    pub fn start_game(&mut self, raw_names: &[String]) -> Result<&mut RoundEngine, SessionError> {
        self.config.validate()?;
        let names = resolve_names(raw_names, self.config.player_count)?;

        self.saved_names = names.clone();
        let settings = Settings {
            names: names.clone(),
            config: self.config,
        };
        if let Err(e) = self.store.save(&settings) {
            warn!(error = %e, "settings not saved");
        }

        self.games_dealt += 1;
        let pairs = self.words.as_ref().map(|w| w.pairs.clone()).unwrap_or_default();
        let rng = self.rng.for_context(&format!("game-{}", self.games_dealt));
        let engine = GameBuilder::new(self.config).names(names).pairs(pairs).build(&rng)?;

        Ok(self.game.insert(engine))
    }

    #[must_use]
    pub fn game(&self) -> Option<&RoundEngine> {
        self.game.as_ref()
    }

    pub fn game_mut(&mut self) -> Option<&mut RoundEngine> {
        self.game.as_mut()
    }

    /// Leave the current game and go back to config. Names are kept.
    pub fn restart(&mut self) {
        self.game = None;
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Phase;
    use crate::words::InlineSource;

    fn names(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_restores_settings() {
        let store = MemorySettingsStore::with_blob(
            r#"{"names":["Ana","Ben","Cid"],"config":{"playerCount":3,"impostorCount":1,"mrWhiteCount":0}}"#,
        );
        let mut session = GameSession::new(store, GameRng::new(1));
        assert_eq!(session.config(), GameConfig::new(3).with_impostors(1));
        assert_eq!(session.name_slots().unwrap(), names(&["Ana", "Ben", "Cid"]));
    }

    #[test]
    fn test_invalid_config_blocks_names() {
        let mut session = GameSession::new(MemorySettingsStore::new(), GameRng::new(1));
        assert_eq!(session.set_config(GameConfig::new(2)), Err(ConfigError::TooFewPlayers));
        assert_eq!(session.config(), GameConfig::new(2));
        assert!(session.name_slots().is_err());
        assert!(session.start_game(&names(&["A", "B"])).is_err());
        assert!(session.game().is_none());
    }

    #[test]
    fn test_words_loaded_once() {
        let mut session = GameSession::new(MemorySettingsStore::new(), GameRng::new(1));
        assert!(!session.load_words(&InlineSource("[]".into())).is_ok());

        // A good list offered later is not fetched: the first result sticks.
        let status = session.load_words(&InlineSource(r#"[{"a":"x","b":"y"}]"#.into())).clone();
        assert!(!status.is_ok());
        assert_eq!(session.word_status(), Some(&status));
    }

    #[test]
    fn test_start_game_saves_settings() {
        let mut session = GameSession::new(MemorySettingsStore::new(), GameRng::new(1));
        session.load_words(&InlineSource(r#"[{"a":"Sun","b":"Moon"}]"#.into()));
        session.set_config(GameConfig::new(4).with_impostors(1)).unwrap();

        let engine = session.start_game(&names(&["Ana", "", "Cid", "Dee"])).unwrap();
        assert_eq!(engine.phase(), &Phase::Distribution { index: 0, revealed: false });
        let civilian = engine.state().words.civilian.clone();
        assert!(civilian == "Sun" || civilian == "Moon");

        let saved = session.store().load().unwrap();
        assert_eq!(saved.names, names(&["Ana", "Player 2", "Cid", "Dee"]));
        assert_eq!(saved.config, GameConfig::new(4).with_impostors(1));
    }

    #[test]
    fn test_duplicate_names_leave_state_untouched() {
        let mut session = GameSession::new(MemorySettingsStore::new(), GameRng::new(1));
        session.set_config(GameConfig::new(3)).unwrap();

        let err = session.start_game(&names(&["Alice", "alice ", "Bob"])).unwrap_err();
        assert!(matches!(err, SessionError::Names(_)));
        assert!(session.store().load().is_none());
        assert!(session.game().is_none());
    }

    #[test]
    fn test_restart_keeps_names() {
        let mut session = GameSession::new(MemorySettingsStore::new(), GameRng::new(1));
        session.set_config(GameConfig::new(3)).unwrap();
        session.start_game(&names(&["Ana", "Ben", "Cid"])).unwrap();

        session.restart();
        assert!(session.game().is_none());
        session.set_config(GameConfig::new(4)).unwrap();
        assert_eq!(session.name_slots().unwrap(), names(&["Ana", "Ben", "Cid", "Player 4"]));
    }
}
