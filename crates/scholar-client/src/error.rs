//! Error types for the ScholarAI clients

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Message used when a successful response carries an unparseable body
pub const INVALID_JSON_MESSAGE: &str = "Invalid JSON response from server";

/// Error types for the ScholarAI clients
#[derive(Error, Debug)]
pub enum Error {
    /// Non-2xx response. `message` is the best text the body offered.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// 2xx response whose body was required to be JSON but was not
    #[error("Invalid JSON response from server")]
    InvalidJson,

    /// Authenticated call attempted without a credential
    #[error("{0}")]
    Unauthenticated(String),

    /// Transport failure (connect, DNS, TLS, timeout), passed through untouched
    #[error(transparent)]
    Dispatch(#[from] reqwest::Error),

    /// JSON was valid but did not match the declared payload type
    #[error("Unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),

    /// Path template referenced a parameter that was not supplied
    #[error("Path template error: {0}")]
    Template(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// HTTP status code, when the failure came from a response
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Http { status, .. } => Some(*status),
            Error::Dispatch(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// True when the call never left the process for lack of a credential
    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, Error::Unauthenticated(_))
    }

    /// Human readable message carried across the boundary
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl From<scholar_config::ConfigError> for Error {
    fn from(err: scholar_config::ConfigError) -> Self {
        Error::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_displays_message_only() {
        let err = Error::Http {
            status: 404,
            message: "not found".to_string(),
        };
        assert_eq!(err.to_string(), "not found");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_invalid_json_message() {
        assert_eq!(Error::InvalidJson.message(), INVALID_JSON_MESSAGE);
        assert_eq!(Error::InvalidJson.status(), None);
    }

    #[test]
    fn test_unauthenticated_flag() {
        assert!(Error::Unauthenticated("no token".into()).is_unauthenticated());
        assert!(!Error::InvalidJson.is_unauthenticated());
    }
}
