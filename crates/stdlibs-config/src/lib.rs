//! # stdlibs-config
//!
//! Layered configuration loading for stdlibs using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`STDLIBS_*` prefix, `__` as separator)
//! 2. Project-level `stdlibs.toml`
//! 3. User-level `~/.config/stdlibs/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `STDLIBS_PATHS__CACHE_DIR` -> `paths.cache_dir`,
//! `STDLIBS_TOOLS__PYTHON` -> `tools.python`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use stdlibs_config::StdlibsConfig;
//!
//! let config = StdlibsConfig::load().expect("config");
//! println!("cache: {}", config.paths.cache_dir.display());
//! ```

mod error;
mod output;
mod paths;
mod tools;

pub use error::ConfigError;
pub use output::OutputConfig;
pub use paths::PathsConfig;
pub use tools::ToolsConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config file, resolved against the working directory.
pub const LOCAL_CONFIG_FILE: &str = "stdlibs.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StdlibsConfig {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub tools: ToolsConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl StdlibsConfig {
    /// Load and validate configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] for unreadable or mistyped sources and
    /// [`ConfigError::InvalidValue`] for values that cannot drive a run.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Extract and validate from an explicit figment.
    ///
    /// # Errors
    ///
    /// Same as [`StdlibsConfig::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("STDLIBS_").split("__"))
    }

    /// Check values that deserialize fine but cannot drive a run.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.tools.validate()
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("stdlibs").join("config.toml"))
    }
}
