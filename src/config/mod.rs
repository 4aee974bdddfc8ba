//! Configuration: TOML file, environment overrides, validation.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, Config, SearchConfig, StorageConfig, UiConfig, API_KEY_ENV_VAR};
