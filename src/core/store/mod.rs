//! Secret store access.
//!
//! The store is an external, already-unlocked tool reached through a
//! command/response contract. Retrieval sits behind the `SecretStore` trait
//! so callers can substitute a fixed or failing store.
//!
//! ## Adding a New Store
//!
//! 1. Implement the `SecretStore` trait
//! 2. Add the implementation in a new file (e.g., `pass.rs`)
//! 3. Re-export from this module

use crate::core::domain::Secret;
use crate::error::Result;

mod rbw;

pub use rbw::Rbw;

/// Secret retrieval trait.
pub trait SecretStore {
    /// Fetch and decode the secret stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns `Error::StoreCommand` if the store cannot be reached or
    /// reports failure, `Error::StoreParse` if its answer is malformed.
    fn fetch(&self, name: &str) -> Result<Secret>;
}

impl<S: SecretStore + ?Sized> SecretStore for &S {
    fn fetch(&self, name: &str) -> Result<Secret> {
        (**self).fetch(name)
    }
}
