//! Error types.
//!
//! Every failure is terminal: `main` reports it once and exits with status 1.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    /// No executable name was given on the command line.
    #[error("missing executable name\n\nUsage: rbw-run <executable-name> [args...]\nThe executable name is also used as the secret name")]
    Usage,

    /// The executable name cannot be used as a secret name.
    #[error("executable name is not valid UTF-8: {0}")]
    InvalidName(String),

    /// The secret store command could not be started or exited non-zero.
    #[error("failed to retrieve secret '{name}' from rbw: {reason}")]
    StoreCommand { name: String, reason: String },

    /// The secret store answered with something that is not a secret record.
    #[error("failed to parse secret '{name}' returned by rbw: {source}")]
    StoreParse {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    /// The executable is not on the search path.
    #[error("executable not found: {name}: {source}")]
    ExecutableNotFound {
        name: String,
        #[source]
        source: which::Error,
    },

    /// The operating system refused to replace the process image.
    #[error("failed to run {}: {source}", path.display())]
    ExecFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is unreadable or invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Configuration file errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}

impl Error {
    /// Follow-up advice printed under the error message, if any.
    pub fn hint(&self) -> Option<String> {
        match self {
            Error::StoreCommand { .. } | Error::StoreParse { .. } => {
                Some("make sure the secret exists and rbw is unlocked".to_string())
            }
            Error::ExecutableNotFound { name, .. } => {
                Some(format!("check that {} is installed and on PATH", name))
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
