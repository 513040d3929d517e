//! Front-end configuration loaded from TOML.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictactoe_core::Mode;
use tracing::{debug, info, instrument};

/// Settings for the terminal game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Mode the first game starts in.
    #[serde(default)]
    mode: Mode,

    /// Where logs go; the terminal itself belongs to the UI.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            log_file: default_log_file(),
            log_filter: default_log_filter(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(mode = %config.mode, "Config loaded successfully");
        Ok(config)
    }

    /// Reads the file named on the command line, if any, then applies flag overrides.
    #[instrument(skip(cli))]
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        if let Some(mode) = cli.mode {
            config.mode = mode.into();
        }
        if let Some(log_file) = &cli.log_file {
            config.log_file = log_file.clone();
        }
        Ok(config)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_full_config() {
        let file = write_config(
            "mode = \"multiplayer\"\nlog_file = \"/tmp/ttt.log\"\nlog_filter = \"debug\"\n",
        );
        let config = GameConfig::from_file(file.path()).unwrap();
        assert_eq!(*config.mode(), Mode::Multiplayer);
        assert_eq!(config.log_file(), &PathBuf::from("/tmp/ttt.log"));
        assert_eq!(config.log_filter(), "debug");
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let file = write_config("");
        let config = GameConfig::from_file(file.path()).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_bad_mode_is_parse_error() {
        let file = write_config("mode = \"online\"\n");
        let err = GameConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = GameConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(err.message.contains("Failed to read config file"));
        assert!(err.file.ends_with("config.rs"));
    }

    #[test]
    fn test_cli_overrides_file() {
        let file = write_config("mode = \"multiplayer\"\nlog_filter = \"warn\"\n");
        let path = file.path().to_str().unwrap();
        let cli = Cli::parse_from(["tictactoe", "--config", path, "--mode", "singleplayer"]);

        let config = GameConfig::resolve(&cli).unwrap();
        assert_eq!(*config.mode(), Mode::Singleplayer);
        assert_eq!(config.log_filter(), "warn");
    }
}
