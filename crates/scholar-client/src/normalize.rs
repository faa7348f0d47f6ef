//! Response normalization
//!
//! Turns a buffered [`RawResponse`] into either a payload or a single
//! [`Error`], whatever convention the backend used for its body.

use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{trace, warn};

use crate::error::{Error, Result};
use crate::response::RawResponse;

/// How a successful body is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseMode {
    /// `{status, message, data, timestamp}` object, returned whole
    Envelope,
    /// Bare JSON (array, scalar or object), returned whole
    Direct,
    /// Bare or enveloped JSON, `data` unwrapped when present
    Raw,
    /// Opaque bytes
    Blob,
}

/// Normalized success payload
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(Value),
    Blob(Bytes),
}

impl Payload {
    /// Deserialize the JSON payload into the caller's type
    pub fn into_json<T: DeserializeOwned>(self) -> Result<T> {
        match self {
            Payload::Json(value) => Ok(serde_json::from_value(value)?),
            Payload::Blob(_) => Err(Error::Decode(serde::de::Error::custom(
                "expected a JSON payload, got binary content",
            ))),
        }
    }

    /// Binary payload; JSON payloads are re-serialized
    pub fn into_bytes(self) -> Result<Bytes> {
        match self {
            Payload::Blob(bytes) => Ok(bytes),
            Payload::Json(value) => Ok(Bytes::from(serde_json::to_vec(&value)?)),
        }
    }
}

/// Decide success or failure and extract the payload for `mode`
pub fn normalize(response: RawResponse, mode: ResponseMode) -> Result<Payload> {
    if !response.is_success() {
        let status = response.status().as_u16();
        let message = error_message(&response);
        warn!(status, %message, "Request failed");
        return Err(Error::Http { status, message });
    }

    match mode {
        ResponseMode::Blob => Ok(Payload::Blob(response.into_bytes())),
        ResponseMode::Envelope | ResponseMode::Direct => parse_json(&response).map(Payload::Json),
        ResponseMode::Raw => parse_json(&response).map(|value| Payload::Json(unwrap_data(value))),
    }
}

/// Best available message for a failed response.
///
/// Order: JSON `message`, JSON `error`, non-empty body text, then a message
/// built from the status code. Empty strings and nulls count as absent.
pub fn error_message(response: &RawResponse) -> String {
    if let Ok(body) = response.json::<Value>() {
        for field in ["message", "error"] {
            if let Some(text) = body.get(field).and_then(field_text) {
                return text;
            }
        }
    }

    let text = response.text();
    if !text.is_empty() {
        return text;
    }

    format!("HTTP error! status: {}", response.status().as_u16())
}

/// Non-string values are rendered as JSON text
fn field_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

fn parse_json(response: &RawResponse) -> Result<Value> {
    response.json::<Value>().map_err(|e| {
        trace!(error = %e, "Successful response body is not JSON");
        Error::InvalidJson
    })
}

/// Objects with a `data` key yield that field (even when null); anything
/// else passes through untouched.
fn unwrap_data(value: Value) -> Value {
    match value {
        Value::Object(mut map) if map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}
