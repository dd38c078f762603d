//! The HTTP seam between the API client and the network.
//!
//! `ApiClient` only speaks in [`ApiRequest`] and [`ApiResponse`]. The default
//! [`ReqwestTransport`] sends them with reqwest; tests substitute their own.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::{ApiError, Result};

/// A request relative to the configured base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    /// Filled in by the client from the session just before sending.
    pub bearer_token: Option<String>,
    /// Whether a 401 may trigger the refresh-and-retry cycle.
    pub allow_refresh: bool,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            bearer_token: None,
            allow_refresh: true,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Serializes `body` as the JSON payload.
    pub fn with_json<T: serde::Serialize>(self, body: &T) -> Result<Self> {
        let value = serde_json::to_value(body)
            .map_err(|e| ApiError::invalid_request(format!("Failed to encode request body: {}", e)))?;
        Ok(self.with_body(value))
    }

    pub fn with_bearer(mut self, token: Option<String>) -> Self {
        self.bearer_token = token;
        self
    }

    /// Login and refresh calls must not recurse into the refresh cycle.
    pub fn without_refresh(mut self) -> Self {
        self.allow_refresh = false;
        self
    }
}

/// Raw response: status code and body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a request and returns whatever the server answered.
///
/// Implementations return `Err` only for transport failures
/// ([`ApiError::Timeout`] or [`ApiError::NetworkUnreachable`]); every HTTP
/// status, including errors, is an `Ok` response.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse>;
}

/// reqwest-backed transport with the configured timeout and JSON headers.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    config: ClientConfig,
}

impl ReqwestTransport {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(Self::default_headers())
            .build()
            .map_err(|e| ApiError::Config(format!("Failed to initialize HTTP client: {}", e)))?;
        Ok(Self { client, config })
    }

    fn default_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }
}

fn classify_transport_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        ApiError::Timeout
    } else {
        ApiError::NetworkUnreachable(err.to_string())
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let url = self.config.url_for(&request.path);
        let mut builder = self.client.request(request.method.clone(), &url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(token) = request.bearer_token.as_deref() {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| ApiError::invalid_request("Session token contains invalid characters"))?;
            builder = builder.header(AUTHORIZATION, value);
        }
        if let Some(body) = request.body.as_ref() {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(classify_transport_error)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(classify_transport_error)?;

        Ok(ApiResponse { status, body })
    }
}
