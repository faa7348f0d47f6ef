//! Buffered HTTP response
//!
//! The body is read off the wire exactly once when the response arrives.
//! Every reader afterwards works on the in-memory buffer, so a failed JSON
//! parse can still fall back to the text without touching the stream again.

use bytes::Bytes;
use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::Result;

/// A fully buffered response
#[derive(Debug, Clone)]
pub struct RawResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl RawResponse {
    pub fn new(status: StatusCode, headers: HeaderMap, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    /// Drain a reqwest response into memory
    pub async fn read(response: reqwest::Response) -> Result<Self> {
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?;
        Ok(Self::new(status, headers, body))
    }

    /// True for 2xx
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Canonical reason phrase, empty for unregistered codes
    pub fn status_text(&self) -> &str {
        self.status.canonical_reason().unwrap_or("")
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn content_type(&self) -> Option<&str> {
        self.headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok())
    }

    /// Parse the buffered body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_slice(&self.body)
    }

    /// Body as text, invalid UTF-8 replaced
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Body bytes (reference counted, no copy)
    pub fn bytes(&self) -> Bytes {
        self.body.clone()
    }

    pub fn into_bytes(self) -> Bytes {
        self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn test_readers_share_one_buffer() {
        let response = RawResponse::new(StatusCode::OK, HeaderMap::new(), r#"{"a":1}"#);

        let value: serde_json::Value = response.json().unwrap();
        assert_eq!(value["a"], 1);
        assert_eq!(response.text(), r#"{"a":1}"#);
        assert_eq!(response.bytes().len(), 7);
    }

    #[test]
    fn test_json_failure_leaves_text_readable() {
        let response =
            RawResponse::new(StatusCode::INTERNAL_SERVER_ERROR, HeaderMap::new(), "boom");

        assert!(response.json::<serde_json::Value>().is_err());
        assert_eq!(response.text(), "boom");
        assert!(!response.is_success());
        assert_eq!(response.status_text(), "Internal Server Error");
    }

    #[test]
    fn test_content_type() {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/pdf"));
        let response = RawResponse::new(StatusCode::OK, headers, vec![0x25, 0x50, 0x44, 0x46]);

        assert_eq!(response.content_type(), Some("application/pdf"));
        assert_eq!(response.into_bytes().as_ref(), b"%PDF");
    }
}
