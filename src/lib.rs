//! rbw-run - Run a program with environment variables pulled from rbw.
//!
//! `rbw-run psql -h db.internal` looks up the rbw entry named `psql`,
//! exports each of its custom fields as an environment variable and then
//! replaces itself with `psql`, so credentials never touch shell history
//! or argument lists.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── output        # stderr message helpers
//! │   └── run           # fetch → merge → launch pipeline
//! └── core/             # Core library components
//!     ├── config        # config.toml and env overrides
//!     ├── constants     # Magic strings
//!     ├── domain/       # Secret, Field, Environment
//!     ├── env           # Secret to environment projection
//!     ├── launcher      # PATH resolution and exec
//!     └── store/        # Secret store trait
//!         └── rbw       # rbw CLI backend
//! ```

pub mod cli;
pub mod core;
pub mod error;
