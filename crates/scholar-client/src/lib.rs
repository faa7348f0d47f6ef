//! # ScholarAI service clients
//!
//! Typed clients for the ScholarAI backend: LaTeX documents, research
//! projects, paper extraction, paper summaries, AI writing assistance and
//! the ScholarBot chat endpoint.
//!
//! Every operation is one round trip: build the URL for the configured
//! deployment environment, dispatch, then normalize the response into a
//! typed value or a single [`Error`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use scholar_client::ScholarClient;
//! use scholar_config::ClientConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ScholarClient::new(ClientConfig::load()?)?;
//!     if let Some(session) = client.session() {
//!         session.set_token("eyJ...", None);
//!     }
//!
//!     let documents = client.documents().list_by_project("project-42").await?;
//!     println!("{} documents", documents.data.unwrap_or_default().len());
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod auth;
pub mod client;
pub mod dispatch;
pub mod endpoint;
pub mod endpoints;
pub mod error;
pub mod normalize;
pub mod resolver;
pub mod response;

pub use api::Envelope;
pub use auth::{CredentialProvider, SessionTokenStore, StaticCredentials};
pub use client::{Call, ClientBuilder, ScholarClient};
pub use dispatch::{AuthenticatedDispatcher, Dispatcher, HttpDispatcher, OutboundRequest};
pub use endpoint::{Access, Endpoint, Target};
pub use error::{Error, Result};
pub use normalize::{normalize, Payload, ResponseMode};
pub use resolver::UrlResolver;
pub use response::RawResponse;
pub use scholar_config::{ClientConfig, DeploymentEnvironment};
