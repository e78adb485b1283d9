//! Configuration management for the leaderboard console
//!
//! Separates startup configuration (read once, requires restart) from board
//! configuration (display settings an admin can change while running).

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

/// Complete application configuration with startup/board separation
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(flatten)]
    pub startup: StartupConfig,

    #[serde(flatten)]
    pub board: BoardConfig,
}

/// Configuration that requires a restart to take effect
#[derive(Debug, Deserialize, Clone)]
pub struct StartupConfig {
    /// Directory holding the persisted `users` and `auth` keys
    /// Environment: LEADERBOARD_STORAGE_DIR
    pub storage_dir: String,

    /// Longest console line accepted for dispatch
    pub max_command_length: usize,

    /// Largest accepted upload (avatar, logo, background) in MB
    /// Environment: LEADERBOARD_MAX_UPLOAD_SIZE_MB
    pub max_upload_size_mb: u64,
}

/// Display settings for the board, updatable at runtime via `WEEK`
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BoardConfig {
    pub week_number: u32,

    /// How many ranked records the board shows
    pub leaderboard_size: usize,

    /// How many of those go on the podium
    pub podium_size: usize,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            storage_dir: "./leaderboard_data".to_string(),
            max_command_length: 512,
            max_upload_size_mb: 10,
        }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            week_number: 12,
            leaderboard_size: 10,
            podium_size: 3,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            startup: StartupConfig::default(),
            board: BoardConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from built-in defaults, an optional `config.toml`
    /// in the working directory, and `LEADERBOARD_*` environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let defaults = AppConfig::default();

        let settings = Config::builder()
            .set_default("storage_dir", defaults.startup.storage_dir.as_str())?
            .set_default(
                "max_command_length",
                defaults.startup.max_command_length as i64,
            )?
            .set_default(
                "max_upload_size_mb",
                defaults.startup.max_upload_size_mb as i64,
            )?
            .set_default("week_number", defaults.board.week_number as i64)?
            .set_default("leaderboard_size", defaults.board.leaderboard_size as i64)?
            .set_default("podium_size", defaults.board.podium_size as i64)?
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("LEADERBOARD"))
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Split into the startup part and the mutable board part
    pub fn split(self) -> (StartupConfig, BoardConfig) {
        (self.startup, self.board)
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.startup.storage_dir.trim().is_empty() {
            return Err(ConfigError::Message("storage_dir cannot be empty".into()));
        }

        if self.startup.max_command_length == 0 {
            return Err(ConfigError::Message(
                "max_command_length must be greater than 0".into(),
            ));
        }

        if self.startup.max_upload_size_mb == 0 {
            return Err(ConfigError::Message(
                "max_upload_size_mb must be greater than 0".into(),
            ));
        }

        if self.board.leaderboard_size == 0 {
            return Err(ConfigError::Message(
                "leaderboard_size must be greater than 0".into(),
            ));
        }

        if self.board.podium_size > self.board.leaderboard_size {
            return Err(ConfigError::Message(
                "podium_size cannot exceed leaderboard_size".into(),
            ));
        }

        Ok(())
    }
}

impl StartupConfig {
    /// Get the storage directory as PathBuf
    pub fn storage_path(&self) -> PathBuf {
        PathBuf::from(&self.storage_dir)
    }

    /// Get maximum upload size in bytes
    pub fn max_upload_size_bytes(&self) -> u64 {
        self.max_upload_size_mb * 1024 * 1024
    }
}
