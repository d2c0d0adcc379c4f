use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::helpers::time::{expiry_from_max_age, now_i64};
use crate::utils::constants::{ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE};

/// Single cookie value with optional max-age derived expiry
#[derive(Debug, Clone)]
pub struct Cookie {
    pub value: String,
    pub expires_at: Option<i64>, // UNIX timestamp, None = session cookie
}

/// In-memory cookie jar: name -> cookie
///
/// Cheap to clone; clones share the same map, so one client's token refresh
/// is visible to every handle. Last writer wins.
#[derive(Debug, Clone, Default)]
pub struct CookieStore {
    inner: Arc<RwLock<HashMap<String, Cookie>>>,
}

impl CookieStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn set(&self, name: &str, value: &str, max_age_seconds: Option<u64>) {
        let cookie = Cookie {
            value: value.to_string(),
            expires_at: max_age_seconds.map(expiry_from_max_age),
        };
        let mut map = self.inner.write().await;
        map.insert(name.to_string(), cookie);
    }

    /// Get cookie value if it exists and is not expired
    pub async fn get(&self, name: &str) -> Option<String> {
        let map = self.inner.read().await;
        map.get(name)
            .filter(|c| c.expires_at.map(|exp| now_i64() < exp).unwrap_or(true))
            .map(|c| c.value.clone())
    }

    pub async fn remove(&self, name: &str) {
        let mut map = self.inner.write().await;
        map.remove(name);
    }

    /// Drop both token cookies, e.g. on logout or failed refresh
    pub async fn clear_tokens(&self) {
        let mut map = self.inner.write().await;
        map.remove(ACCESS_TOKEN_COOKIE);
        map.remove(REFRESH_TOKEN_COOKIE);
    }
}
