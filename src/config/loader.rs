use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::{Config, API_KEY_ENV_VAR};

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/popcorn/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("popcorn").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Applies `OMDB_API_KEY` when it is set and non-empty.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(key) = std::env::var(API_KEY_ENV_VAR) {
            if !key.trim().is_empty() {
                self.api.api_key = key;
            }
        }
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - `api.base_url` is an absolute URL
    /// - `search.min_query_len` is at least 1
    /// - `ui.max_rating` is within 1..=10
    /// - `storage.key` is a plain, non-empty file stem
    pub fn validate(&self) -> Result<(), ConfigError> {
        if reqwest::Url::parse(&self.api.base_url).is_err() {
            return Err(ConfigError::ValidationError {
                message: format!("api.base_url '{}' is not a valid URL", self.api.base_url),
            });
        }

        if self.search.min_query_len == 0 {
            return Err(ConfigError::ValidationError {
                message: "search.min_query_len must be at least 1".to_string(),
            });
        }

        if !(1..=10).contains(&self.ui.max_rating) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "ui.max_rating must be between 1 and 10, got {}",
                    self.ui.max_rating
                ),
            });
        }

        let key = self.storage.key.trim();
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(ConfigError::ValidationError {
                message: format!("storage.key '{}' is not a valid slot name", self.storage.key),
            });
        }

        Ok(())
    }

    /// Fails when no API key is configured.
    ///
    /// Only operations that talk to the movie database call this.
    pub fn require_api_key(&self) -> Result<(), ConfigError> {
        if self.api.has_api_key() {
            return Ok(());
        }
        Err(ConfigError::ValidationError {
            message: format!(
                "No OMDb API key configured. Set api.api_key in {} or export {}",
                Self::config_path().display(),
                API_KEY_ENV_VAR
            ),
        })
    }
}
