//! Core library components.
//!
//! Secret retrieval, environment projection and process launching,
//! independent of the command-line front end.

pub mod config;
pub mod constants;
pub mod domain;
pub mod env;
pub mod launcher;
pub mod store;
