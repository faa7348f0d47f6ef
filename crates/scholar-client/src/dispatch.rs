//! Request dispatch
//!
//! [`Dispatcher`] is the seam between the clients and the network. The
//! default [`HttpDispatcher`] runs on reqwest; [`AuthenticatedDispatcher`]
//! wraps any dispatcher and attaches a bearer token.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};
use reqwest::Method;
use scholar_config::HttpConfig;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::auth::CredentialProvider;
use crate::error::{Error, Result};
use crate::response::RawResponse;

/// Message carried by [`Error::Unauthenticated`] when no token is available
pub const MISSING_TOKEN_MESSAGE: &str = "No authentication token available. Please log in.";

/// A request ready to send
#[derive(Debug, Clone)]
pub struct OutboundRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<Value>,
}

impl OutboundRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Attach a JSON body
    pub fn with_json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// Sends a request and buffers the response
#[async_trait]
pub trait Dispatcher: Send + Sync {
    async fn dispatch(&self, request: OutboundRequest) -> Result<RawResponse>;
}

/// reqwest-backed dispatcher without credentials
#[derive(Debug, Clone)]
pub struct HttpDispatcher {
    client: reqwest::Client,
}

impl HttpDispatcher {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Build the underlying reqwest client from configuration
    pub fn from_config(config: &HttpConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Dispatcher for HttpDispatcher {
    async fn dispatch(&self, request: OutboundRequest) -> Result<RawResponse> {
        debug!(method = %request.method, url = %request.url, "Dispatching request");

        let mut builder = self
            .client
            .request(request.method, &request.url)
            .headers(request.headers);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let raw = RawResponse::read(response).await?;
        debug!(status = raw.status().as_u16(), url = %request.url, "Response received");
        Ok(raw)
    }
}

/// Dispatcher that requires a bearer token
#[derive(Clone)]
pub struct AuthenticatedDispatcher {
    inner: Arc<dyn Dispatcher>,
    credentials: Arc<dyn CredentialProvider>,
}

impl AuthenticatedDispatcher {
    pub fn new(inner: Arc<dyn Dispatcher>, credentials: Arc<dyn CredentialProvider>) -> Self {
        Self { inner, credentials }
    }
}

#[async_trait]
impl Dispatcher for AuthenticatedDispatcher {
    async fn dispatch(&self, mut request: OutboundRequest) -> Result<RawResponse> {
        let token = self
            .credentials
            .bearer_token()
            .await?
            .ok_or_else(|| Error::Unauthenticated(MISSING_TOKEN_MESSAGE.to_string()))?;

        let value = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|_| {
            Error::Unauthenticated("Authentication token contains invalid characters".to_string())
        })?;
        request.headers.insert(AUTHORIZATION, value);

        self.inner.dispatch(request).await
    }
}
