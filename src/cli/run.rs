//! Run command.
//!
//! Fetches the secret named after the executable, exports its fields as
//! environment variables and replaces this process with the executable.

use std::ffi::OsString;
use tracing::debug;

use crate::core::config::Config;
use crate::core::domain::Environment;
use crate::core::env;
use crate::core::launcher::{self, Exec, Launcher};
use crate::core::store::SecretStore;
use crate::error::{Error, Result};

/// Run `command` with its secret injected.
///
/// Only returns on failure; on success the process image is replaced.
pub fn execute(command: &[OsString]) -> Result<()> {
    let (executable, args) = split_command(command)?;
    let config = Config::load()?;
    let store = config.store();

    Err(run(&store, &Exec, executable, args, Environment::inherited()))
}

/// Split a command line into the executable name and forwarded arguments.
///
/// # Errors
///
/// Returns `Error::Usage` for an empty command line and
/// `Error::InvalidName` if the executable name is not UTF-8.
pub fn split_command(command: &[OsString]) -> Result<(&str, &[OsString])> {
    let (first, rest) = command.split_first().ok_or(Error::Usage)?;
    let name = first
        .to_str()
        .ok_or_else(|| Error::InvalidName(first.to_string_lossy().into_owned()))?;
    Ok((name, rest))
}

/// Fetch, merge and launch.
///
/// Each stage runs only if the previous one succeeded. The returned error
/// is the first failure.
pub fn run<S, L>(
    store: &S,
    launcher: &L,
    executable: &str,
    args: &[OsString],
    inherited: Environment,
) -> Error
where
    S: SecretStore + ?Sized,
    L: Launcher,
{
    let secret = match store.fetch(executable) {
        Ok(secret) => secret,
        Err(e) => return e,
    };
    let env = env::merge(&secret, inherited);
    drop(secret);

    debug!(executable, args = args.len(), "launching");
    launcher::launch(launcher, executable, args, env)
}
