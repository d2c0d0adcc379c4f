use serde::Deserialize;

use crate::utils::constants::{
    DEFAULT_ACCESS_TOKEN_LIFETIME_SECS, DEFAULT_REFRESH_TOKEN_LIFETIME_SECS, DEFAULT_TOKEN_PREFIX,
};

/// ================================
/// Client-wide configuration
/// ================================
///
/// Immutable after construction. Callers start from `ClientConfig::new` and
/// layer overrides with the `with_*` methods, or deserialize the whole thing
/// from YAML; either way the same serde defaults apply.
#[derive(Debug, Deserialize, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    #[serde(default = "default_token_prefix")]
    pub token_prefix: String,
    /// max-age in seconds for the access token cookie
    #[serde(default = "default_access_token_lifetime")]
    pub access_token_lifetime: u64,
    /// max-age in seconds for the refresh token cookie
    #[serde(default = "default_refresh_token_lifetime")]
    pub refresh_token_lifetime: u64,
    /// refresh-and-retry once on 401
    #[serde(default = "default_enabled")]
    pub auto_refresh: bool,
    /// attach X-CSRFToken from the csrftoken cookie
    #[serde(default = "default_enabled")]
    pub csrf_enabled: bool,
    pub retry: Option<RetryConfig>,
    pub logging: Option<LoggingConfig>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token_prefix: default_token_prefix(),
            access_token_lifetime: default_access_token_lifetime(),
            refresh_token_lifetime: default_refresh_token_lifetime(),
            auto_refresh: true,
            csrf_enabled: true,
            retry: None,
            logging: None,
        }
    }

    pub fn with_token_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.token_prefix = prefix.into();
        self
    }

    pub fn with_token_lifetimes(mut self, access_seconds: u64, refresh_seconds: u64) -> Self {
        self.access_token_lifetime = access_seconds;
        self.refresh_token_lifetime = refresh_seconds;
        self
    }

    pub fn with_auto_refresh(mut self, enabled: bool) -> Self {
        self.auto_refresh = enabled;
        self
    }

    pub fn with_csrf_enabled(mut self, enabled: bool) -> Self {
        self.csrf_enabled = enabled;
        self
    }

    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = Some(retry);
        self
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct RetryConfig {
    pub attempts: Option<u32>,
    /// doubled on every attempt until max_delay_ms
    pub base_delay_ms: Option<u64>,
    /// invariant: >= base_delay_ms
    pub max_delay_ms: Option<u64>,
}

/// ================================
/// Logging
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String, // allowed: trace, debug, info, warn, error
    pub format: LogFormat,
}

impl LoggingConfig {
    pub fn new(level: String, format: LogFormat) -> Self {
        Self { level, format }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Compact,
}

impl LogFormat {
    pub fn from_env() -> Self {
        match std::env::var("LOG_FORMAT")
            .unwrap_or_else(|_| "json".to_string())
            .to_lowercase()
            .as_str()
        {
            "compact" | "text" => LogFormat::Compact,
            _ => LogFormat::Json,
        }
    }
}

fn default_token_prefix() -> String {
    DEFAULT_TOKEN_PREFIX.to_string()
}

fn default_access_token_lifetime() -> u64 {
    DEFAULT_ACCESS_TOKEN_LIFETIME_SECS
}

fn default_refresh_token_lifetime() -> u64 {
    DEFAULT_REFRESH_TOKEN_LIFETIME_SECS
}

fn default_enabled() -> bool {
    true
}
