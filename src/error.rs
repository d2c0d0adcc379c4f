use serde_json::{json, Value};
use thiserror::Error;

/// Typed error surfaced by the fetch wrapper.
///
/// Every variant carries enough to route on: the HTTP status (0 for
/// transport failures) and the parsed response body.
#[derive(Debug, Error)]
pub enum ApiError {
    /// 401 with refresh disabled, exhausted, or failed
    #[error("Unauthorized")]
    Unauthorized { status: u16, details: Value },

    /// Any other non-2xx response
    #[error("{message}")]
    Api {
        message: String,
        status: u16,
        details: Value,
    },

    /// Transport-level failure, reported as status 0
    #[error("Network error: {detail}")]
    Network { detail: String },
}

impl ApiError {
    pub fn status(&self) -> u16 {
        match self {
            ApiError::Unauthorized { status, .. } => *status,
            ApiError::Api { status, .. } => *status,
            ApiError::Network { .. } => 0,
        }
    }

    pub fn details(&self) -> Value {
        match self {
            ApiError::Unauthorized { details, .. } => details.clone(),
            ApiError::Api { details, .. } => details.clone(),
            ApiError::Network { detail } => json!({ "detail": detail }),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }
}
