//! # Django Auth Client
//!
//! Client SDK for Django REST backends using SimpleJWT-style cookie auth:
//! attaches bearer and CSRF headers from stored cookies and transparently
//! refreshes expired access tokens on 401 responses (one retry, no queuing).
//!
//! Modules:
//! - `config` — client configuration with defaults merge and YAML loading
//! - `cookies` — in-memory cookie store with max-age expiry
//! - `client` — the authenticated fetch wrapper and request options
//! - `auth` — login / logout / current-user on top of the wrapper

pub mod auth;
pub mod client;
pub mod config;
pub mod cookies;
pub mod error;
pub mod helpers;
pub mod resilience;
pub mod types;
pub mod utils;

#[cfg(test)]
mod tests;

pub use crate::auth::Auth;
pub use crate::client::{ApiClient, FetchOptions};
pub use crate::config::ClientConfig;
pub use crate::cookies::CookieStore;
pub use crate::error::ApiError;
pub use crate::types::{TokenPair, User};
