//! Secret to environment projection.
//!
//! Layers the fields of a secret over the inherited process environment.

use tracing::debug;

use crate::core::domain::{Environment, Secret};

/// Merge secret fields over an inherited environment.
///
/// Fields are applied in sequence order, so a field overrides both the
/// inherited value and any earlier field with the same name. Reserved
/// metadata fields (`executable`, `custom-type`) are skipped. Values are
/// passed through verbatim.
pub fn merge(secret: &Secret, inherited: Environment) -> Environment {
    let mut env = inherited;
    let mut injected = 0usize;

    for field in secret.fields() {
        if field.is_reserved() {
            debug!(field = field.name(), "skipping reserved field");
            continue;
        }
        env.set(field.name(), field.value());
        injected += 1;
    }

    debug!(injected, total = env.len(), "environment built");
    env
}
