//! # form-config
//!
//! Layered configuration loading for formwork using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`FORMWORK_*` prefix, `__` as separator)
//! 2. Project-level `.formwork/config.toml`
//! 3. User-level `~/.config/formwork/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `FORMWORK_STORAGE__ROOT` -> `storage.root`,
//! `FORMWORK_GENERAL__PRETTY` -> `general.pretty`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use form_config::FormConfig;
//!
//! let config = FormConfig::load_with_dotenv().expect("config");
//! println!("definitions live in {}", config.storage.schema_path().display());
//! ```

mod error;
mod general;
mod storage;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use storage::StorageConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "FORMWORK_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FormConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl FormConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source cannot be parsed, or
    /// `ConfigError::InvalidValue` if the merged storage section is unusable.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.storage.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or layer extra
    /// providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".formwork/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("formwork").join("config.toml"))
    }
}
