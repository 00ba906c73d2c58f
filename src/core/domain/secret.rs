//! Secret type.
//!
//! A decoded secret record as emitted by `rbw get --raw`.

use serde::Deserialize;
use zeroize::Zeroize;

use crate::core::constants::RESERVED_FIELDS;

/// One named credential attribute of a secret.
///
/// The value is wiped from memory on drop and never shown by `Debug`.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Field {
    name: String,
    value: String,
    #[serde(rename = "type", default)]
    kind: Option<String>,
}

impl Field {
    /// Create a field from its parts.
    pub fn new(name: impl Into<String>, value: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            kind: Some(kind.into()),
        }
    }

    /// Field name, used as the environment variable name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Plaintext value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Informational type tag (`text`, `hidden`, ...), empty when absent
    pub fn kind(&self) -> &str {
        self.kind.as_deref().unwrap_or_default()
    }

    /// Whether this field is metadata that must not become an env var
    pub fn is_reserved(&self) -> bool {
        RESERVED_FIELDS.contains(&self.name.as_str())
    }
}

impl Drop for Field {
    fn drop(&mut self) {
        self.value.zeroize();
    }
}

impl std::fmt::Debug for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("value", &"<redacted>")
            .field("type", &self.kind())
            .finish()
    }
}

/// A secret record: an ordered list of fields.
///
/// Order matters, a later field overrides an earlier one with the same name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Secret {
    fields: Vec<Field>,
}

impl Secret {
    /// Create a secret from fields in sequence order
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Decode the JSON record printed by the store.
    ///
    /// Keys other than `fields` are ignored.
    ///
    /// # Errors
    ///
    /// Returns the decoder error if the payload is not an object with a
    /// well-formed `fields` array.
    pub fn from_json(payload: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(payload)
    }

    /// Fields in sequence order
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the secret has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
