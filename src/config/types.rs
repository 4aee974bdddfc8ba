use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable that overrides `api.api_key`.
pub const API_KEY_ENV_VAR: &str = "OMDB_API_KEY";

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Movie database endpoint settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL for the OMDb API (e.g., "https://www.omdbapi.com").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// API key sent as the `apikey` query parameter.
    #[serde(default)]
    pub api_key: String,
    /// Request timeout in seconds (default: 10).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Queries shorter than this (in characters) never hit the network.
    #[serde(default = "default_min_query_len")]
    pub min_query_len: usize,
}

/// Where the watched list lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the key-value slots. Defaults to the platform data dir.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    /// Slot name for the watched list.
    #[serde(default = "default_storage_key")]
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Highest star a user can give (default: 10).
    #[serde(default = "default_max_rating")]
    pub max_rating: u8,
    /// Redraw tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_base_url() -> String {
    "https://www.omdbapi.com".to_string()
}

fn default_timeout() -> u32 {
    10
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_min_query_len() -> usize {
    3
}

fn default_storage_key() -> String {
    "watched".to_string()
}

fn default_max_rating() -> u8 {
    10
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_query_len: default_min_query_len(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            key: default_storage_key(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            max_rating: default_max_rating(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl ApiConfig {
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

impl StorageConfig {
    /// Resolved data directory.
    ///
    /// Uses `~/.local/share/popcorn` on Linux (via `dirs::data_dir()`),
    /// falling back to the current directory.
    pub fn resolved_data_dir(&self) -> PathBuf {
        match &self.data_dir {
            Some(dir) => dir.clone(),
            None => dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("popcorn"),
        }
    }
}
