//! # declmap-config
//!
//! Layered configuration loading for declmap using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`DECLMAP_*` prefix, `__` as separator)
//! 2. An explicit file passed to [`DeclmapConfig::load_with_file`]
//! 3. Project-level `.declmap/config.toml`
//! 4. User-level `~/.config/declmap/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `DECLMAP_OUTPUT__FORMAT` -> `output.format`,
//! `DECLMAP_OUTPUT__QUALIFY_METHODS` -> `output.qualify_methods`.
//!
//! # Usage
//!
//! ```no_run
//! use declmap_config::DeclmapConfig;
//!
//! let config = DeclmapConfig::load().expect("config");
//! println!("format: {}", config.output.format);
//! ```

mod error;
mod output;

pub use error::ConfigError;
pub use output::OutputConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable prefix for overrides.
pub const ENV_PREFIX: &str = "DECLMAP_";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DeclmapConfig {
    #[serde(default)]
    pub output: OutputConfig,
}

impl DeclmapConfig {
    /// Load configuration from user/project TOML files and environment variables.
    ///
    /// # Errors
    /// Returns `ConfigError::Figment` if a source holds an invalid value.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Like [`load`](Self::load), with `path` merged above the project file.
    ///
    /// # Errors
    /// Returns `ConfigError::MissingFile` if `path` does not exist, or
    /// `ConfigError::Figment` on invalid values.
    pub fn load_with_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.is_file() {
            return Err(ConfigError::MissingFile {
                path: path.display().to_string(),
            });
        }
        Self::figment_with_file(Some(path))
            .extract()
            .map_err(ConfigError::from)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers on top.
    pub fn figment() -> Figment {
        Self::figment_with_file(None)
    }

    fn figment_with_file(explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".declmap/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Explicit --config file
        if let Some(path) = explicit {
            figment = figment.merge(Toml::file(path));
        }

        // Layer 4: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("declmap").join("config.toml"))
    }
}
