//! Configuration management.
//!
//! Settings are layered: built-in defaults, then the optional
//! `config.toml` under the user config directory (or `RBW_RUN_CONFIG`),
//! then the `RBW_RUN_STORE` environment variable.

use serde::Deserialize;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::core::store::Rbw;
use crate::error::{ConfigError, Result};

/// Contents of `config.toml`
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Secret store settings
    #[serde(default)]
    pub store: StoreConfig,
}

/// `[store]` section
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    /// Store program name or path, defaults to `rbw`
    pub program: Option<String>,
}

impl Config {
    /// Default config file location, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(constants::CONFIG_DIR).join(constants::CONFIG_FILE))
    }

    /// Config file location honouring `RBW_RUN_CONFIG`
    pub fn config_path() -> Option<PathBuf> {
        std::env::var_os(constants::CONFIG_ENV)
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .or_else(Self::default_path)
    }

    /// Load the configuration, falling back to defaults if no file exists.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            Some(path) => {
                debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` or `ConfigError::Parse`.
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` for an empty store program.
    pub fn validate(&self) -> Result<()> {
        if let Some(program) = &self.store.program {
            if program.trim().is_empty() {
                return Err(ConfigError::Invalid("store.program must not be empty".to_string()).into());
            }
        }
        Ok(())
    }

    /// Store program after applying the `RBW_RUN_STORE` override
    pub fn store_program(&self) -> OsString {
        resolve_store_program(
            std::env::var_os(constants::STORE_ENV),
            self.store.program.as_deref(),
        )
    }

    /// Build the store client described by this configuration
    pub fn store(&self) -> Rbw {
        let program = self.store_program();
        debug!(program = ?program, "using secret store");
        Rbw::new(program)
    }
}

fn resolve_store_program(env_override: Option<OsString>, configured: Option<&str>) -> OsString {
    env_override
        .filter(|p| !p.to_string_lossy().trim().is_empty())
        .or_else(|| configured.map(OsString::from))
        .unwrap_or_else(|| OsString::from(constants::DEFAULT_STORE_PROGRAM))
}
