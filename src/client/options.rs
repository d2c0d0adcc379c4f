use http::{HeaderMap, HeaderName, HeaderValue, Method};
use serde_json::Value;

/// Per-request options for [`ApiClient::fetch`](crate::ApiClient::fetch).
///
/// Caller-supplied headers override anything the client computes.
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    pub method: Option<Method>, // defaults to GET
    pub body: Option<Value>,
    pub headers: HeaderMap,
    /// suppress the Authorization header (used by the refresh call itself)
    pub skip_auth: bool,
}

impl FetchOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn post(body: Value) -> Self {
        Self {
            method: Some(Method::POST),
            body: Some(body),
            ..Self::default()
        }
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    pub fn with_json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn with_skip_auth(mut self) -> Self {
        self.skip_auth = true;
        self
    }

    pub fn method(&self) -> Method {
        self.method.clone().unwrap_or(Method::GET)
    }
}
