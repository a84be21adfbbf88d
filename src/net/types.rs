//! Session payload DTOs.
//!
//! DESIGN
//! ======
//! Field names follow the auth provider's camelCase JSON so the session
//! endpoint response deserializes directly.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Authenticated session as returned by `/api/auth/session`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionData {
    /// Precomputed license check for the deployment.
    pub has_valid_license: bool,
    #[serde(default)]
    pub user: Option<SessionUser>,
    /// Session expiry as an ISO-8601 string.
    #[serde(default)]
    pub expires: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Parse a session endpoint body.
///
/// An empty object (`{}`) means there is no session and yields `None`, as
/// does any body without a license flag.
pub fn parse_session(body: &str) -> Option<SessionData> {
    serde_json::from_str(body).ok()
}
