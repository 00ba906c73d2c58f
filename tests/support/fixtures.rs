//! Test fixtures and constants.

/// A record shaped like `rbw get --raw` output for a database login.
pub const PSQL_SECRET: &str = r#"{
  "id": "4a1b2c3d-0000-1111-2222-333344445555",
  "folder": "infra",
  "name": "env",
  "data": {"username": "admin", "password": "login-password", "totp": null, "uris": []},
  "fields": [
    {"name": "executable", "value": "psql", "type": "text"},
    {"name": "custom-type", "value": "database", "type": "text"},
    {"name": "PGUSER", "value": "admin", "type": "text"},
    {"name": "PGPASSWORD", "value": "s3cr3t-value", "type": "hidden"}
  ],
  "notes": null,
  "history": []
}"#;

/// Build a minimal secret record from name/value pairs.
pub fn secret_json(fields: &[(&str, &str)]) -> String {
    let fields: Vec<serde_json::Value> = fields
        .iter()
        .map(|(name, value)| serde_json::json!({"name": name, "value": value, "type": "text"}))
        .collect();
    serde_json::json!({ "fields": fields }).to_string()
}
