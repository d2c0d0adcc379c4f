use std::fmt::Display;
use tokio::time::{sleep, Duration};
use tracing::warn;

use crate::config::settings::RetryConfig;

const DEFAULT_RETRY_ATTEMPTS: u32 = 3;
const DEFAULT_BASE_DELAY_MS: u64 = 100;
const DEFAULT_MAX_DELAY_MS: u64 = 2000;

#[derive(Debug, Clone)]
pub struct RetrySettings {
    pub attempts: u32,
    pub base_delay_ms: u64,
    pub max_delay_ms: u64,
}

impl Default for RetrySettings {
    /// single attempt, no backoff
    fn default() -> Self {
        Self {
            attempts: 1,
            base_delay_ms: 0,
            max_delay_ms: 0,
        }
    }
}

impl RetrySettings {
    /// No retry section in config means one attempt; a present but partial
    /// section fills the gaps with the usual backoff defaults.
    pub fn from_config(config: Option<&RetryConfig>) -> Self {
        match config {
            None => Self::default(),
            Some(cfg) => Self {
                attempts: cfg.attempts.unwrap_or(DEFAULT_RETRY_ATTEMPTS).max(1),
                base_delay_ms: cfg.base_delay_ms.unwrap_or(DEFAULT_BASE_DELAY_MS),
                max_delay_ms: cfg.max_delay_ms.unwrap_or(DEFAULT_MAX_DELAY_MS),
            },
        }
    }

    pub async fn run_with_retry<F, Fut, T, E>(&self, mut operation: F) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: std::future::Future<Output = Result<T, E>>,
        E: Display,
    {
        let mut delay = self.base_delay_ms;

        for attempt in 1..=self.attempts {
            match operation().await {
                Ok(value) => return Ok(value),
                Err(e) if attempt < self.attempts => {
                    warn!("Attempt {attempt}/{} failed: {e}", self.attempts);
                    sleep(Duration::from_millis(delay)).await;
                    delay = (delay * 2).min(self.max_delay_ms);
                }
                Err(e) => return Err(e),
            }
        }
        unreachable!("Retry loop exhausted unexpectedly")
    }
}
