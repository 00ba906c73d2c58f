//! Domain types.

mod env;
mod secret;

pub use env::Environment;
pub use secret::{Field, Secret};
