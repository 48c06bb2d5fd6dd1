//! Loading the configured board: config file plus its event store.

use std::path::{Path, PathBuf};

use config::{Config, File};

use crate::board_config::BoardConfig;
use crate::error::{BoardError, BoardResult};
use crate::store::{EventStore, JsonFileSlot};

pub struct Board {
    config_path: PathBuf,
    config: BoardConfig,
}

impl Board {
    /// Load ~/.config/eventboard/config.toml, creating it on first run.
    pub fn load() -> BoardResult<Self> {
        let config_path = BoardConfig::config_path()?;

        if !config_path.exists() {
            BoardConfig::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load the config at `config_path`; a missing file yields defaults.
    pub fn load_from(config_path: &Path) -> BoardResult<Self> {
        let config: BoardConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .map_err(|e| BoardError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| BoardError::Config(e.to_string()))?;

        tracing::debug!(path = %config_path.display(), "Loaded config");

        Ok(Board {
            config_path: config_path.to_path_buf(),
            config,
        })
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Apply `change` to the config and write it back.
    pub fn update_config(&mut self, change: impl FnOnce(&mut BoardConfig)) -> BoardResult<()> {
        let mut updated = self.config.clone();
        change(&mut updated);
        updated.calendar_window()?;

        updated.save(&self.config_path)?;
        self.config = updated;
        Ok(())
    }

    /// Open the event store backed by the configured data file.
    pub fn store(&self) -> EventStore<JsonFileSlot> {
        EventStore::load(JsonFileSlot::new(self.config.data_path()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::NewEvent;
    use crate::views::WindowSize;

    fn board_in(dir: &Path, toml: &str) -> Board {
        let config_path = dir.join("config.toml");
        std::fs::write(&config_path, toml).unwrap();
        Board::load_from(&config_path).unwrap()
    }

    #[test]
    fn test_missing_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let board = Board::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(board.config(), &BoardConfig::default());
    }

    #[test]
    fn test_store_uses_configured_data_file() {
        let dir = tempfile::tempdir().unwrap();
        let data_file = dir.path().join("data/events.json");
        let board = board_in(
            dir.path(),
            &format!("data_file = {:?}\n", data_file.to_string_lossy()),
        );

        let mut store = board.store();
        store.add(NewEvent::default());

        assert!(data_file.exists());
        assert_eq!(board.store().snapshot().len(), 1);
    }

    #[test]
    fn test_update_config_persists() {
        let dir = tempfile::tempdir().unwrap();
        let mut board = board_in(dir.path(), "");

        board.update_config(|c| c.calendar_weeks = 52).unwrap();
        assert_eq!(board.config().calendar_window().unwrap(), WindowSize::Year);

        let reloaded = Board::load_from(board.config_path()).unwrap();
        assert_eq!(reloaded.config().calendar_weeks, 52);
    }

    #[test]
    fn test_update_config_rejects_bad_window() {
        let dir = tempfile::tempdir().unwrap();
        let mut board = board_in(dir.path(), "calendar_weeks = 4\n");

        assert!(board.update_config(|c| c.calendar_weeks = 5).is_err());
        assert_eq!(board.config().calendar_weeks, 4);
    }
}
