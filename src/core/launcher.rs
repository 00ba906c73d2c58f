//! Process launching.
//!
//! Resolves the target on PATH and replaces the current process image with
//! it. There is no parent left behind: signals, stdio and the exit status
//! belong to the launched program exactly as if the shell had started it.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::domain::Environment;
use crate::error::Error;

/// A fully resolved program invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: PathBuf,
    argv: Vec<OsString>,
    env: Environment,
}

impl Invocation {
    /// Resolve `executable` on PATH and build its argument vector.
    ///
    /// argv[0] is the name as given, not the resolved path, followed by
    /// `args` unchanged.
    ///
    /// # Errors
    ///
    /// Returns `Error::ExecutableNotFound` if nothing on PATH matches.
    pub fn resolve(executable: &str, args: &[OsString], env: Environment) -> Result<Self, Error> {
        let program = which::which(executable).map_err(|source| Error::ExecutableNotFound {
            name: executable.to_string(),
            source,
        })?;
        debug!(executable, path = %program.display(), "resolved executable");
        Ok(Self::new(program, executable, args, env))
    }

    /// Build an invocation for an already resolved program
    pub fn new(
        program: impl Into<PathBuf>,
        executable: &str,
        args: &[OsString],
        env: Environment,
    ) -> Self {
        let mut argv = Vec::with_capacity(args.len() + 1);
        argv.push(OsString::from(executable));
        argv.extend(args.iter().cloned());

        Self {
            program: program.into(),
            argv,
            env,
        }
    }

    /// Resolved program path
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Argument vector, starting with argv[0]
    pub fn argv(&self) -> &[OsString] {
        &self.argv
    }

    /// Complete environment of the new image
    pub fn env(&self) -> &Environment {
        &self.env
    }
}

/// Terminal transfer of control to an invocation.
pub trait Launcher {
    /// Replace the current process with `invocation`.
    ///
    /// Never returns on success. A returned value is always the reason
    /// the replacement failed; the caller is still running as itself.
    fn exec(&self, invocation: Invocation) -> Error;
}

impl<L: Launcher + ?Sized> Launcher for &L {
    fn exec(&self, invocation: Invocation) -> Error {
        (**self).exec(invocation)
    }
}

/// Replaces the process image with `execve(2)`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Exec;

impl Launcher for Exec {
    #[cfg(unix)]
    fn exec(&self, invocation: Invocation) -> Error {
        let Invocation { program, argv, env } = invocation;

        debug!(path = %program.display(), argc = argv.len(), "replacing process image");

        // execve only returns on failure. Unlike execvp it never retries
        // through /bin/sh, so ENOEXEC reaches the caller.
        let source = match exec_image(&program, argv, &env) {
            Ok(never) => match never {},
            Err(e) => e,
        };
        Error::ExecFailed {
            path: program,
            source,
        }
    }

    #[cfg(not(unix))]
    fn exec(&self, invocation: Invocation) -> Error {
        Error::ExecFailed {
            path: invocation.program,
            source: std::io::Error::new(
                std::io::ErrorKind::Unsupported,
                "process replacement is not supported on this platform",
            ),
        }
    }
}

#[cfg(unix)]
fn exec_image(
    program: &Path,
    argv: Vec<OsString>,
    env: &Environment,
) -> std::io::Result<std::convert::Infallible> {
    use std::ffi::CString;
    use std::os::unix::ffi::{OsStrExt, OsStringExt};

    let path = c_string(program.as_os_str().as_bytes().to_vec())?;
    let args = argv
        .into_iter()
        .map(|arg| c_string(arg.into_vec()))
        .collect::<std::io::Result<Vec<CString>>>()?;
    let vars = env
        .iter()
        .map(|(name, value)| {
            let mut entry = name.as_bytes().to_vec();
            entry.push(b'=');
            entry.extend_from_slice(value.as_bytes());
            c_string(entry)
        })
        .collect::<std::io::Result<Vec<CString>>>()?;

    nix::unistd::execve(&path, &args, &vars).map_err(std::io::Error::from)
}

#[cfg(unix)]
fn c_string(bytes: Vec<u8>) -> std::io::Result<std::ffi::CString> {
    std::ffi::CString::new(bytes)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))
}

/// Resolve `executable` and hand control to it via `launcher`.
///
/// Only returns on failure.
pub fn launch<L: Launcher>(
    launcher: &L,
    executable: &str,
    args: &[OsString],
    env: Environment,
) -> Error {
    match Invocation::resolve(executable, args, env) {
        Ok(invocation) => launcher.exec(invocation),
        Err(e) => e,
    }
}
