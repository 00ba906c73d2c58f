//! rbw-run - Run a program with environment variables pulled from rbw.

use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use rbw_run::cli::output;
use rbw_run::cli::{execute, Cli};
use rbw_run::core::constants::LOG_ENV;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                let _ = e.print();
                std::process::exit(1);
            }
        },
    };

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("rbw_run=debug")
        } else {
            EnvFilter::new("rbw_run=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(&cli.command) {
        output::error(&e.to_string());
        if let Some(hint) = e.hint() {
            output::hint(&hint);
        }
        std::process::exit(1);
    }
}
