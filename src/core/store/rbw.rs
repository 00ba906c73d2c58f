//! rbw store backend.
//!
//! Runs `rbw get --raw <name>` and decodes the JSON record it prints.
//!
//! ## Requirements
//!
//! - `rbw` must be installed (or another program speaking the same
//!   contract configured via `RBW_RUN_STORE`)
//! - the rbw agent must already be unlocked

use std::ffi::OsString;
use std::process::{Command, Stdio};
use tracing::{debug, trace};
use zeroize::Zeroizing;

use super::SecretStore;
use crate::core::constants::STORE_GET_ARGS;
use crate::core::domain::Secret;
use crate::error::{Error, Result};

/// rbw backend using the rbw CLI
#[derive(Debug, Clone)]
pub struct Rbw {
    program: OsString,
}

impl Rbw {
    /// Invoke `program` (a name looked up on PATH, or a path)
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn command(&self, name: &str) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(STORE_GET_ARGS)
            .arg(name)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        cmd
    }
}

impl SecretStore for Rbw {
    fn fetch(&self, name: &str) -> Result<Secret> {
        debug!(program = ?self.program, secret = name, "querying secret store");

        let output = self
            .command(name)
            .output()
            .map_err(|e| Error::StoreCommand {
                name: name.to_string(),
                reason: format!("failed to spawn {}: {}", self.program.to_string_lossy(), e),
            })?;

        let stdout = Zeroizing::new(output.stdout);

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            let reason = if stderr.is_empty() {
                format!("rbw command failed: {}", output.status)
            } else {
                format!("rbw command failed: {}: {}", output.status, stderr)
            };
            return Err(Error::StoreCommand {
                name: name.to_string(),
                reason,
            });
        }

        trace!(payload_len = stdout.len(), "store answered");

        let secret = Secret::from_json(&stdout).map_err(|source| Error::StoreParse {
            name: name.to_string(),
            source,
        })?;

        debug!(fields = secret.len(), "secret decoded");
        Ok(secret)
    }
}
