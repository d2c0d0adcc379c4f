use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::{HeaderMap, HeaderValue};
use reqwest::Client;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::client::options::FetchOptions;
use crate::config::settings::ClientConfig;
use crate::cookies::CookieStore;
use crate::error::ApiError;
use crate::resilience::RetrySettings;
use crate::types::RefreshResponse;
use crate::utils::constants::{
    ACCESS_TOKEN_COOKIE, CSRF_HEADER, CSRF_TOKEN_COOKIE, REFRESH_ENDPOINT, REFRESH_TOKEN_COOKIE,
};

/// What a handled response asks the caller to do next
enum Disposition {
    Body(Value),
    RetryOnce,
}

/// Authenticated fetch wrapper.
///
/// Attaches Authorization and (optionally) CSRF headers from the cookie
/// store, issues the request against the configured base URL, and on a 401
/// refreshes the access token and retries the original request exactly once.
/// Clones share config, cookie store and connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    pub config: Arc<ClientConfig>,
    pub cookies: CookieStore,
    client: Client,
    retry: RetrySettings,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_cookies(config, CookieStore::new())
    }

    /// Build a client over an existing cookie store
    pub fn with_cookies(config: ClientConfig, cookies: CookieStore) -> Self {
        let client = Client::builder()
            .build()
            .expect("Failed to build HTTP client");
        let retry = RetrySettings::from_config(config.retry.as_ref());

        Self {
            config: Arc::new(config),
            cookies,
            client,
            retry,
        }
    }

    /// Issue a request and return the parsed JSON body.
    ///
    /// Empty or non-JSON 2xx bodies come back as `Value::Null`. Non-2xx
    /// responses surface as [`ApiError`] carrying status and parsed body;
    /// a 401 goes through the single refresh-and-retry cycle first when
    /// `auto_refresh` is on.
    pub async fn fetch(&self, path: &str, options: FetchOptions) -> Result<Value, ApiError> {
        let response = self.send(path, &options).await?;

        match self.handle_response(response, true).await? {
            Disposition::Body(value) => Ok(value),
            Disposition::RetryOnce => {
                debug!(path, "access token refreshed, retrying request");
                let response = self.send(path, &options).await?;
                match self.handle_response(response, false).await? {
                    Disposition::Body(value) => Ok(value),
                    Disposition::RetryOnce => {
                        unreachable!("refresh is disabled on the retried request")
                    }
                }
            }
        }
    }

    pub async fn get(&self, path: &str) -> Result<Value, ApiError> {
        self.fetch(path, FetchOptions::get()).await
    }

    pub async fn post(&self, path: &str, body: Value) -> Result<Value, ApiError> {
        self.fetch(path, FetchOptions::post(body)).await
    }

    /// Send with headers prepared fresh on every attempt, so a refreshed
    /// access token is picked up by retries. Transport failures are retried
    /// per the configured backoff (one attempt when unconfigured), then
    /// wrapped as status-0 network errors.
    async fn send(&self, path: &str, options: &FetchOptions) -> Result<reqwest::Response, ApiError> {
        self.retry
            .run_with_retry(|| self.execute(path, options))
            .await
            .map_err(|e| ApiError::Network {
                detail: e.to_string(),
            })
    }

    async fn execute(
        &self,
        path: &str,
        options: &FetchOptions,
    ) -> Result<reqwest::Response, reqwest::Error> {
        let url = format!("{}{}", self.config.base_url, path);
        let mut request = self.client.request(options.method(), &url);

        request = request.headers(self.prepare_headers(options).await);
        if let Some(body) = &options.body {
            request = request.body(body.to_string());
        }
        request.send().await
    }

    /// Compute request headers from config and cookie state.
    /// Caller-supplied headers are applied last and win.
    async fn prepare_headers(&self, options: &FetchOptions) -> HeaderMap {
        let mut headers = HeaderMap::new();

        if !options.skip_auth {
            if let Some(token) = self.cookies.get(ACCESS_TOKEN_COOKIE).await {
                let bearer = format!("{} {}", self.config.token_prefix, token);
                match HeaderValue::from_str(&bearer) {
                    Ok(value) => {
                        headers.insert(AUTHORIZATION, value);
                    }
                    Err(e) => warn!("access token is not a valid header value: {e}"),
                }
            }
        }

        if options.body.is_some() {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        if self.config.csrf_enabled {
            if let Some(token) = self.cookies.get(CSRF_TOKEN_COOKIE).await {
                match HeaderValue::from_str(&token) {
                    Ok(value) => {
                        headers.insert(CSRF_HEADER, value);
                    }
                    Err(e) => warn!("{CSRF_TOKEN_COOKIE} cookie is not a valid header value: {e}"),
                }
            }
        }

        for (name, value) in options.headers.iter() {
            headers.insert(name.clone(), value.clone());
        }
        headers
    }

    async fn handle_response(
        &self,
        response: reqwest::Response,
        allow_refresh: bool,
    ) -> Result<Disposition, ApiError> {
        let status = response.status();

        if status.is_success() {
            let body = response.text().await.map_err(|e| ApiError::Network {
                detail: e.to_string(),
            })?;
            // empty responses are valid (204, DELETE endpoints)
            let value = serde_json::from_str(&body).unwrap_or(Value::Null);
            return Ok(Disposition::Body(value));
        }

        let details = response
            .json::<Value>()
            .await
            .unwrap_or_else(|_| json!({ "detail": "An error occurred" }));

        if status == http::StatusCode::UNAUTHORIZED {
            if allow_refresh && self.config.auto_refresh {
                if self.refresh_tokens().await {
                    return Ok(Disposition::RetryOnce);
                }
                // refresh failed: both token cookies are dead weight now
                self.cookies.clear_tokens().await;
            }
            return Err(ApiError::Unauthorized {
                status: status.as_u16(),
                details,
            });
        }

        let message = details
            .get("detail")
            .and_then(Value::as_str)
            .unwrap_or("API Error")
            .to_string();
        Err(ApiError::Api {
            message,
            status: status.as_u16(),
            details,
        })
    }

    /// POST the refresh token to the refresh endpoint and store the newly
    /// minted access token. Returns false on any failure; the caller decides
    /// what a failed refresh means.
    async fn refresh_tokens(&self) -> bool {
        let Some(refresh) = self.cookies.get(REFRESH_TOKEN_COOKIE).await else {
            debug!("no refresh token cookie, skipping refresh");
            return false;
        };

        let url = format!("{}{}", self.config.base_url, REFRESH_ENDPOINT);
        let result = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .body(json!({ "refresh": refresh }).to_string())
            .send()
            .await;

        match result {
            Ok(response) if response.status().is_success() => {
                match response.json::<RefreshResponse>().await {
                    Ok(data) => {
                        self.cookies
                            .set(
                                ACCESS_TOKEN_COOKIE,
                                &data.access,
                                Some(self.config.access_token_lifetime),
                            )
                            .await;
                        true
                    }
                    Err(e) => {
                        warn!("refresh response is not a token: {e}");
                        false
                    }
                }
            }
            Ok(response) => {
                warn!("token refresh failed: {}", response.status());
                false
            }
            Err(e) => {
                warn!("token refresh request error: {e}");
                false
            }
        }
    }
}
