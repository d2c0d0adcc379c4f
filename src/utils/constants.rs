//! Shared constants and invariants

use http::HeaderName;

// Cookie names used by the backend
pub const ACCESS_TOKEN_COOKIE: &str = "access_token";
pub const REFRESH_TOKEN_COOKIE: &str = "refresh_token";
pub const CSRF_TOKEN_COOKIE: &str = "csrftoken";

// Wire surface (header names are lowercase on the wire: X-CSRFToken)
pub const CSRF_HEADER: HeaderName = HeaderName::from_static("x-csrftoken");
pub const REFRESH_ENDPOINT: &str = "/api/token/refresh/";
pub const USERS_ME_ENDPOINT: &str = "/api/users/me/";

// Config defaults
pub const DEFAULT_TOKEN_PREFIX: &str = "Bearer";
pub const DEFAULT_ACCESS_TOKEN_LIFETIME_SECS: u64 = 300;
pub const DEFAULT_REFRESH_TOKEN_LIFETIME_SECS: u64 = 86400;
