use serde_json::{json, Value};
use tracing::debug;

use crate::client::{ApiClient, FetchOptions};
use crate::error::ApiError;
use crate::types::{TokenPair, User};
use crate::utils::constants::{ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE, USERS_ME_ENDPOINT};

/// Login / logout / current-user operations on top of the fetch wrapper.
///
/// Shares the client's cookie store, so a successful login is immediately
/// visible to every request going through the same client.
#[derive(Debug, Clone)]
pub struct Auth {
    client: ApiClient,
}

impl Auth {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// POST credentials to `login_path`, store the issued token pair as
    /// cookies, then fetch and return the authenticated user.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
        is_email: bool,
        login_path: &str,
    ) -> Result<User, ApiError> {
        let body = if is_email {
            json!({ "email": username, "password": password })
        } else {
            json!({ "username": username, "password": password })
        };

        let response = self.client.fetch(login_path, FetchOptions::post(body)).await?;
        let tokens: TokenPair = serde_json::from_value(response.clone()).map_err(|e| {
            ApiError::Api {
                message: format!("login response is not a token pair: {e}"),
                status: 200,
                details: response,
            }
        })?;

        let config = &self.client.config;
        self.client
            .cookies
            .set(
                ACCESS_TOKEN_COOKIE,
                &tokens.access,
                Some(config.access_token_lifetime),
            )
            .await;
        self.client
            .cookies
            .set(
                REFRESH_TOKEN_COOKIE,
                &tokens.refresh,
                Some(config.refresh_token_lifetime),
            )
            .await;
        debug!(username, "login succeeded, token cookies stored");

        self.current_user().await.ok_or_else(|| ApiError::Api {
            message: "Failed to retrieve user after login".to_string(),
            status: 200,
            details: Value::Null,
        })
    }

    /// Drop both token cookies. Purely local, no server round-trip.
    pub async fn logout(&self) {
        self.client.cookies.clear_tokens().await;
        debug!("token cookies cleared");
    }

    /// Fetch the authenticated user; any failure reads as not-logged-in
    pub async fn current_user(&self) -> Option<User> {
        let value = self.client.get(USERS_ME_ENDPOINT).await.ok()?;
        serde_json::from_value(value).ok()
    }
}
