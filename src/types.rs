use serde::{Deserialize, Serialize};

/// Access/refresh pair as issued by the login endpoint
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Refresh endpoint response: mints a new access token only
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshResponse {
    pub access: String,
}

/// Server-side user record. Identity fields are required; anything else the
/// backend returns lands in `extra` untouched.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
