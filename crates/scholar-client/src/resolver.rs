//! Service URL resolution
//!
//! Joins the environment's gateway base, an optional service segment and a
//! path. Slashes at the joins are normalized so `base/`, `/service/` and
//! `path` without a leading slash all produce the same URL.

use parking_lot::RwLock;
use scholar_config::{ClientConfig, DeploymentEnvironment};
use std::sync::Arc;

/// Resolves logical service paths to absolute URLs.
///
/// Cloning shares the underlying configuration; [`update`](Self::update) is
/// seen by every clone on its next call.
#[derive(Debug, Clone)]
pub struct UrlResolver {
    config: Arc<RwLock<ClientConfig>>,
}

impl UrlResolver {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
        }
    }

    /// Swap in new configuration for subsequent lookups
    pub fn update(&self, config: ClientConfig) {
        *self.config.write() = config;
    }

    pub fn environment(&self) -> DeploymentEnvironment {
        self.config.read().environment
    }

    /// Current gateway base for the configured environment
    pub fn gateway_base_url(&self) -> String {
        self.config.read().gateway_base_url().to_string()
    }

    /// `base + "/" + service + path`
    pub fn resolve_service_url(&self, service: &str, path: &str) -> String {
        let base = self.gateway_base_url();
        let service = service.trim_matches('/');
        if service.is_empty() {
            return join(&base, path);
        }
        join(&format!("{}/{}", base.trim_end_matches('/'), service), path)
    }

    /// `base + path`, for callers that address the gateway directly
    pub fn resolve_url(&self, path: &str) -> String {
        join(&self.gateway_base_url(), path)
    }

    /// URL on the standalone project/research API
    pub fn resolve_project_url(&self, path: &str) -> String {
        let base = self.config.read().project_api.base_url.clone();
        join(&base, path)
    }
}

fn join(base: &str, path: &str) -> String {
    let base = base.trim().trim_end_matches('/');
    if path.is_empty() {
        return base.to_string();
    }
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}
