//! Test support utilities for rbw-run integration tests.
//!
//! Provides an isolated environment with a fake `rbw` on disk.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with an isolated home and a fake secret store.
///
/// The fake store is a shell script passed to rbw-run through
/// `RBW_RUN_STORE`, so no real rbw or vault is ever touched.
pub struct Test {
    /// Temporary home directory (also the config dir)
    pub home: TempDir,
    /// Directory holding the fake store script
    pub bin: TempDir,
}

impl Test {
    /// Create a test environment whose store runs `body`.
    pub fn with_store(body: &str) -> Self {
        let home = TempDir::new().expect("failed to create temp home");
        let bin = TempDir::new().expect("failed to create temp bin");
        let t = Self { home, bin };

        let path = t.store_path();
        std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).expect("failed to write fake rbw");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("failed to chmod fake rbw");
        t
    }

    /// Create a test environment whose store prints `json` and succeeds.
    pub fn with_secret(json: &str) -> Self {
        Self::with_store(&format!(
            "touch \"$(dirname \"$0\")/called\"\ncat <<'__SECRET__'\n{}\n__SECRET__",
            json
        ))
    }

    /// Create a test environment whose secret has the given fields.
    pub fn with_fields(fields: &[(&str, &str)]) -> Self {
        Self::with_secret(&secret_json(fields))
    }

    /// Path of the fake store script
    pub fn store_path(&self) -> PathBuf {
        self.bin.path().join("rbw")
    }

    /// Whether the fake store was invoked (only tracked by `with_secret`)
    pub fn store_called(&self) -> bool {
        self.bin.path().join("called").exists()
    }

    /// Write a config file into the temp home and return its path
    pub fn write_config(&self, contents: &str) -> PathBuf {
        let path = self.home.path().join("config.toml");
        std::fs::write(&path, contents).expect("failed to write config");
        path
    }
}
