//! Command-line interface.

pub mod output;
pub mod run;

use clap::Parser;
use std::ffi::OsString;

pub use run::execute;

/// rbw-run - Run a program with its secrets from rbw as env vars.
#[derive(Parser, Debug)]
#[command(
    name = "rbw-run",
    about = "Run a program with environment variables from an rbw secret",
    version,
    after_help = "The executable name is also used as the secret name.\n\
                  Every custom field of the secret becomes an environment variable,\n\
                  except `executable` and `custom-type`.\n\n\
                  rbw must already be unlocked (run `rbw unlock`)."
)]
pub struct Cli {
    /// Enable debug logging (or set RBW_RUN_LOG)
    #[arg(short, long)]
    pub verbose: bool,

    /// Program to run followed by its arguments
    #[arg(
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_name = "EXECUTABLE [ARGS]..."
    )]
    pub command: Vec<OsString>,
}
