//! Command helper methods for Test.

use super::Test;
use assert_cmd::cargo::CommandCargoExt;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a plain `std::process::Command` for rbw-run.
    ///
    /// Configured with:
    /// - HOME and XDG_CONFIG_HOME set to the temporary home directory
    /// - RBW_RUN_STORE pointing at the fake store
    /// - logging and config overrides from the outer environment removed
    pub fn std_cmd(&self) -> std::process::Command {
        #[allow(deprecated)]
        let mut cmd =
            std::process::Command::cargo_bin("rbw-run").expect("failed to find rbw-run binary");
        cmd.env("HOME", self.home.path());
        cmd.env("XDG_CONFIG_HOME", self.home.path());
        cmd.env("RBW_RUN_STORE", self.store_path());
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("RBW_RUN_LOG");
        cmd.env_remove("RBW_RUN_CONFIG");
        cmd
    }

    /// Create an rbw-run command with correct environment variables.
    pub fn cmd(&self) -> Command {
        Command::from_std(self.std_cmd())
    }

    /// Shortcut for `rbw-run <args...>`.
    pub fn run(&self, args: &[&str]) -> Output {
        self.cmd()
            .args(args)
            .output()
            .expect("failed to run rbw-run")
    }

    /// Shortcut for `rbw-run <args...>` with extra environment variables.
    pub fn run_with_env(&self, args: &[&str], env: &[(&str, &str)]) -> Output {
        let mut cmd = self.cmd();
        for (k, v) in env {
            cmd.env(k, v);
        }
        cmd.args(args).output().expect("failed to run rbw-run")
    }
}
