//! Bearer credential handling.
//!
//! The access token is the only secret the client holds. It is wrapped so
//! that it never leaks through `Debug`/`Display` into logs.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Access token whose formatting is always masked.
#[derive(Clone, PartialEq, Eq)]
pub struct SecureString(String);

impl SecureString {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Raw token, for the `Authorization` header and the session file.
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SecureString(***)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("***")
    }
}

impl Serialize for SecureString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for SecureString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(SecureString)
    }
}

/// Build the `Authorization` header for a token.
///
/// Returns `None` for an empty token so callers can skip the header.
pub fn build_auth_header(token: &SecureString) -> Option<(&'static str, String)> {
    if token.is_empty() {
        return None;
    }
    Some(("Authorization", format!("Bearer {}", token.expose())))
}
