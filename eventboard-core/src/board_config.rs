//! Global eventboard configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{BoardError, BoardResult};
use crate::views::WindowSize;
use crate::views::dashboard::DEFAULT_UPCOMING_DAYS;

static DEFAULT_DATA_FILE: &str = "~/.local/share/eventboard/events.json";

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_upcoming_days() -> i64 {
    DEFAULT_UPCOMING_DAYS
}

fn default_calendar_weeks() -> u32 {
    WindowSize::default().weeks()
}

/// Configuration at ~/.config/eventboard/config.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// Where the event collection is stored
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// How many days ahead the dashboard's upcoming section reaches
    #[serde(default = "default_upcoming_days")]
    pub upcoming_days: i64,

    /// Default calendar window in weeks (1, 4, 8 or 52)
    #[serde(default = "default_calendar_weeks")]
    pub calendar_weeks: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            data_file: default_data_file(),
            upcoming_days: default_upcoming_days(),
            calendar_weeks: default_calendar_weeks(),
        }
    }
}

impl BoardConfig {
    pub fn config_path() -> BoardResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| BoardError::Config("Could not determine config directory".into()))?
            .join("eventboard");

        Ok(config_dir.join("config.toml"))
    }

    /// The calendar window configured as default.
    pub fn calendar_window(&self) -> BoardResult<WindowSize> {
        WindowSize::try_from(self.calendar_weeks)
    }

    /// `data_file` with a leading `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let expanded = shellexpand::tilde(&self.data_file.to_string_lossy()).into_owned();
        PathBuf::from(expanded)
    }

    /// Save the current config, overwriting the file at `path`.
    pub fn save(&self, path: &Path) -> BoardResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| BoardError::Config(e.to_string()))?;

        std::fs::write(path, content)
            .map_err(|e| BoardError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> BoardResult<()> {
        let contents = format!(
            "\
# eventboard configuration

# Where events are stored:
# data_file = \"{}\"

# Days ahead shown under \"Upcoming Events\" on the home dashboard:
# upcoming_days = {}

# Default calendar window in weeks (1, 4, 8 or 52):
# calendar_weeks = {}
",
            DEFAULT_DATA_FILE,
            default_upcoming_days(),
            default_calendar_weeks(),
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                BoardError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| BoardError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BoardConfig::default();
        assert_eq!(config.upcoming_days, 14);
        assert_eq!(config.calendar_window().unwrap(), WindowSize::OneWeek);
        assert!(config.data_path().ends_with("eventboard/events.json"));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: BoardConfig = toml::from_str("calendar_weeks = 8").unwrap();
        assert_eq!(config.calendar_window().unwrap(), WindowSize::EightWeeks);
        assert_eq!(config.data_file, default_data_file());
    }

    #[test]
    fn test_invalid_window() {
        let config = BoardConfig {
            calendar_weeks: 3,
            ..Default::default()
        };
        assert!(matches!(config.calendar_window(), Err(BoardError::InvalidWindow(3))));
    }

    #[test]
    fn test_default_config_file_parses_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("eventboard/config.toml");
        BoardConfig::create_default_config(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let config: BoardConfig = toml::from_str(&content).unwrap();
        assert_eq!(config, BoardConfig::default());
    }

    #[test]
    fn test_save_writes_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = BoardConfig {
            upcoming_days: 30,
            ..Default::default()
        };
        config.save(&path).unwrap();

        let reread: BoardConfig = toml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(reread, config);
    }
}
