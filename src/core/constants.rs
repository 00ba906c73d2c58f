//! Constants used throughout rbw-run.
//!
//! Centralizes magic strings and configuration values.

/// Default secret store program.
pub const DEFAULT_STORE_PROGRAM: &str = "rbw";

/// Arguments placed before the secret name when invoking the store.
pub const STORE_GET_ARGS: &[&str] = &["get", "--raw"];

/// Field names that describe the secret and never become env vars.
pub const RESERVED_FIELDS: &[&str] = &["executable", "custom-type"];

/// Config directory name under the platform config dir.
pub const CONFIG_DIR: &str = "rbw-run";

/// Config file name.
pub const CONFIG_FILE: &str = "config.toml";

/// Overrides the config file location.
pub const CONFIG_ENV: &str = "RBW_RUN_CONFIG";

/// Overrides the store program.
pub const STORE_ENV: &str = "RBW_RUN_STORE";

/// Log filter directives (`tracing_subscriber::EnvFilter` syntax).
pub const LOG_ENV: &str = "RBW_RUN_LOG";
