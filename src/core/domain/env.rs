//! Environment type.
//!
//! A name to value mapping handed to the launched program.

use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};

/// Environment variables with unique names.
///
/// Names and values are OS strings so inherited variables that are not
/// valid UTF-8 pass through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    vars: BTreeMap<OsString, OsString>,
}

impl Environment {
    /// Create an empty environment
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the environment of the current process
    pub fn inherited() -> Self {
        std::env::vars_os().collect()
    }

    /// Set a variable, replacing any previous value
    pub fn set(&mut self, name: impl Into<OsString>, value: impl Into<OsString>) {
        self.vars.insert(name.into(), value.into());
    }

    /// Get a variable by name
    pub fn get(&self, name: impl AsRef<OsStr>) -> Option<&OsStr> {
        self.vars.get(name.as_ref()).map(OsString::as_os_str)
    }

    /// Whether a variable is set
    pub fn contains(&self, name: impl AsRef<OsStr>) -> bool {
        self.vars.contains_key(name.as_ref())
    }

    /// All variables, sorted by name
    pub fn iter(&self) -> impl Iterator<Item = (&OsStr, &OsStr)> {
        self.vars.iter().map(|(k, v)| (k.as_os_str(), v.as_os_str()))
    }

    /// Number of variables
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether empty
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Environment
where
    K: Into<OsString>,
    V: Into<OsString>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut env = Self::new();
        for (k, v) in iter {
            env.set(k, v);
        }
        env
    }
}
