//! Credential sources for authenticated requests
//!
//! The dispatcher asks a [`CredentialProvider`] for a bearer token right
//! before each authenticated call. `None` means "not logged in" and stops
//! the call before anything goes on the wire.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::time::{Duration, Instant};
use tracing::debug;

use crate::error::Result;

/// Tokens this close to expiry are treated as already expired
const EXPIRY_BUFFER: Duration = Duration::from_secs(60);

/// Source of bearer tokens
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    /// Current token, or `None` when no credential is available
    async fn bearer_token(&self) -> Result<Option<String>>;
}

/// Fixed token, typically from configuration
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials {
    token: Option<String>,
}

impl StaticCredentials {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    /// Provider that never has a token
    pub fn none() -> Self {
        Self { token: None }
    }
}

#[async_trait]
impl CredentialProvider for StaticCredentials {
    async fn bearer_token(&self) -> Result<Option<String>> {
        Ok(self.token.clone())
    }
}

#[derive(Debug, Clone)]
struct StoredToken {
    access_token: String,
    expires_at: Option<Instant>,
}

impl StoredToken {
    fn is_valid(&self) -> bool {
        match self.expires_at {
            Some(expires_at) => expires_at > Instant::now() + EXPIRY_BUFFER,
            None => true,
        }
    }
}

/// Mutable session state holding the logged-in user's token.
///
/// Shared behind an `Arc`; the login flow calls [`set_token`](Self::set_token)
/// and logout calls [`clear`](Self::clear).
#[derive(Debug, Default)]
pub struct SessionTokenStore {
    token: RwLock<Option<StoredToken>>,
}

impl SessionTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with a token that does not expire
    pub fn with_token(token: impl Into<String>) -> Self {
        let store = Self::new();
        store.set_token(token, None);
        store
    }

    /// Replace the stored token. `expires_in` is measured from now.
    pub fn set_token(&self, token: impl Into<String>, expires_in: Option<Duration>) {
        *self.token.write() = Some(StoredToken {
            access_token: token.into(),
            expires_at: expires_in.map(|d| Instant::now() + d),
        });
    }

    pub fn clear(&self) {
        *self.token.write() = None;
    }

    /// Valid token, if any
    pub fn current(&self) -> Option<String> {
        let guard = self.token.read();
        match guard.as_ref() {
            Some(stored) if stored.is_valid() => Some(stored.access_token.clone()),
            Some(_) => {
                debug!("Stored session token has expired");
                None
            }
            None => None,
        }
    }
}

#[async_trait]
impl CredentialProvider for SessionTokenStore {
    async fn bearer_token(&self) -> Result<Option<String>> {
        Ok(self.current())
    }
}
