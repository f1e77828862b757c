pub mod models;

pub use models::*;

use crate::types::errors::ConfigError;
use std::path::PathBuf;

impl AppConfig {
    /// Load `.env` if present, then read the `GYMCARD_*` variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            log::debug!("No .env loaded: {e}");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Unset or blank variables keep
    /// their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = AppConfig::default();

        if let Some(path) = get(ENV_STATE_DB) {
            config.state_db = PathBuf::from(path);
        }
        if let Some(unit) = get(ENV_DISPLAY_UNIT) {
            config.display_unit = unit.parse()?;
        }
        if let Some(path) = get(ENV_CARD_PATH) {
            config.card_path = PathBuf::from(path);
        }

        log::debug!("Loaded config: {config:?}");
        Ok(config)
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
