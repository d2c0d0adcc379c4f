// Non-401 errors pass straight through with status and parsed body; transport
// failures wrap into status-0 network errors.

#[cfg(test)]
mod test {

    use axum::routing::{get, post};
    use axum::{Json, Router};
    use http::StatusCode;
    use httpmock::prelude::*;
    use serde_json::{json, Value};

    use crate::client::FetchOptions;
    use crate::config::ClientConfig;
    use crate::error::ApiError;
    use crate::tests::common::{base_url, seeded_client, spawn_axum};

    #[tokio::test]
    async fn not_found_is_surfaced_without_refresh_attempt() {
        let server = MockServer::start_async().await;
        let not_found = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/things/42/");
                then.status(404).json_body(json!({ "detail": "Not found." }));
            })
            .await;
        let refresh = server
            .mock_async(|when, then| {
                when.method(POST).path("/api/token/refresh/");
                then.status(200).json_body(json!({ "access": "unused" }));
            })
            .await;

        let client = seeded_client(
            ClientConfig::new(server.base_url()),
            Some("tok"),
            Some("refresh-1"),
            None,
        )
        .await;

        let err = client
            .fetch("/api/things/42/", FetchOptions::get())
            .await
            .unwrap_err();

        match err {
            ApiError::Api {
                message,
                status,
                details,
            } => {
                assert_eq!(status, 404);
                assert_eq!(message, "Not found.");
                assert_eq!(details["detail"], "Not found.");
            }
            other => panic!("expected ApiError::Api, got {other:?}"),
        }
        not_found.assert_async().await;
        assert_eq!(refresh.hits_async().await, 0, "no refresh for non-401 errors");
    }

    #[tokio::test]
    async fn validation_error_carries_field_details() {
        let router = Router::new().route(
            "/api/things/",
            post(|| async {
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(json!({ "name": ["This field is required."] })),
                )
            }),
        );
        let (handle, addr) = spawn_axum(router).await;

        let client = seeded_client(ClientConfig::new(base_url(addr)), Some("tok"), None, None).await;
        let err = client
            .fetch("/api/things/", FetchOptions::post(json!({})))
            .await
            .unwrap_err();

        assert_eq!(err.status(), 422);
        // no "detail" field, so the generic message is used
        assert_eq!(err.to_string(), "API Error");
        assert_eq!(err.details()["name"][0], "This field is required.");
        handle.abort();
    }

    #[tokio::test]
    async fn non_json_error_body_falls_back_to_stub_detail() {
        let router = Router::new().route(
            "/api/broken/",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>") }),
        );
        let (handle, addr) = spawn_axum(router).await;

        let client = seeded_client(ClientConfig::new(base_url(addr)), None, None, None).await;
        let err = client
            .fetch("/api/broken/", FetchOptions::get())
            .await
            .unwrap_err();

        assert_eq!(err.status(), 500);
        assert_eq!(err.details()["detail"], "An error occurred");
        handle.abort();
    }

    #[tokio::test]
    async fn connection_failure_is_a_status_zero_network_error() {
        // discard port, nothing listens there
        let client = seeded_client(
            ClientConfig::new("http://127.0.0.1:9"),
            Some("tok"),
            None,
            None,
        )
        .await;

        let err = client
            .fetch("/api/data/", FetchOptions::get())
            .await
            .unwrap_err();

        assert_eq!(err.status(), 0);
        assert!(matches!(err, ApiError::Network { .. }));
    }

    #[tokio::test]
    async fn empty_success_body_reads_as_null() {
        let router = Router::new().route("/api/ping/", get(|| async { StatusCode::NO_CONTENT }));
        let (handle, addr) = spawn_axum(router).await;

        let client = seeded_client(ClientConfig::new(base_url(addr)), None, None, None).await;
        let value = client
            .fetch("/api/ping/", FetchOptions::get())
            .await
            .unwrap();

        assert_eq!(value, Value::Null);
        handle.abort();
    }
}
