// tests/common/mod.rs
pub use axum::Router;
pub use serde_json::json;
pub use tokio::task::JoinHandle;

use std::net::SocketAddr;

use crate::client::ApiClient;
use crate::config::ClientConfig;
use crate::utils::constants::{ACCESS_TOKEN_COOKIE, CSRF_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE};

/// Spawn an Axum router on an ephemeral port and return (JoinHandle, SocketAddr)
pub async fn spawn_axum(router: Router) -> (JoinHandle<()>, SocketAddr) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind failed");
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, router).await.expect("server failed");
    });
    (handle, addr)
}

pub fn base_url(addr: SocketAddr) -> String {
    format!("http://{}", addr)
}

/// Client with token/CSRF cookies pre-seeded (None leaves a cookie unset)
pub async fn seeded_client(
    config: ClientConfig,
    access: Option<&str>,
    refresh: Option<&str>,
    csrf: Option<&str>,
) -> ApiClient {
    let client = ApiClient::new(config);
    if let Some(value) = access {
        client
            .cookies
            .set(ACCESS_TOKEN_COOKIE, value, Some(300))
            .await;
    }
    if let Some(value) = refresh {
        client
            .cookies
            .set(REFRESH_TOKEN_COOKIE, value, Some(86400))
            .await;
    }
    if let Some(value) = csrf {
        client.cookies.set(CSRF_TOKEN_COOKIE, value, None).await;
    }
    client
}
