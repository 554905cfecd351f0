//! Keys used in the local key/value store.

/// Serialized [`sid_core::Identity`] of whoever is signed in
pub const SESSION_SNAPSHOT_KEY: &str = "simulatedUser";

/// Prefix of registered credential records: `user_<lowercased email>`
pub const CREDENTIAL_KEY_PREFIX: &str = "user_";

/// Storage key for an already-normalized email
pub fn credential_key(normalized_email: &str) -> String {
    format!("{CREDENTIAL_KEY_PREFIX}{normalized_email}")
}
