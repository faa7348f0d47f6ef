//! ScholarAI Client Configuration
//!
//! TOML-based configuration with environment variable overrides. The loaded
//! [`ClientConfig`] is built once at startup and handed to the client; nothing
//! in the client reads the process environment on its own.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

mod loader;

pub use loader::ConfigLoader;

/// Fallback gateway for local development.
pub const DEFAULT_DEV_BASE_URL: &str = "http://localhost:8989";
/// Fallback gateway inside the docker-compose network.
pub const DEFAULT_DOCKER_BASE_URL: &str = "http://api-gateway:8989";
/// Fallback gateway for the production deployment.
pub const DEFAULT_PROD_BASE_URL: &str = "http://4.247.29.26:8989";
/// Fallback base for the standalone project/research API.
pub const DEFAULT_PROJECT_API_URL: &str = "http://localhost:8083/api/v1";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),

    #[error("Environment variable error: {0}")]
    EnvError(String),
}

/// Deployment environment selecting which gateway base URL is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentEnvironment {
    #[default]
    Dev,
    Docker,
    Prod,
}

impl DeploymentEnvironment {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeploymentEnvironment::Dev => "dev",
            DeploymentEnvironment::Docker => "docker",
            DeploymentEnvironment::Prod => "prod",
        }
    }
}

impl fmt::Display for DeploymentEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeploymentEnvironment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dev" | "development" | "local" => Ok(DeploymentEnvironment::Dev),
            "docker" => Ok(DeploymentEnvironment::Docker),
            "prod" | "production" => Ok(DeploymentEnvironment::Prod),
            other => Err(ConfigError::ValidationError(format!(
                "Unknown deployment environment: {}",
                other
            ))),
        }
    }
}

/// Root client configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub environment: DeploymentEnvironment,
    pub gateway: GatewayConfig,
    pub project_api: ProjectApiConfig,
    pub http: HttpConfig,
    pub auth: AuthConfig,
}

/// Per-environment gateway overrides. `None` falls back to the built-in default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    pub dev_base_url: Option<String>,
    pub docker_base_url: Option<String>,
    pub prod_base_url: Option<String>,
}

impl GatewayConfig {
    /// Gateway base URL for `environment`, override first, then the built-in default.
    pub fn base_url_for(&self, environment: DeploymentEnvironment) -> &str {
        let (configured, fallback) = match environment {
            DeploymentEnvironment::Dev => (&self.dev_base_url, DEFAULT_DEV_BASE_URL),
            DeploymentEnvironment::Docker => (&self.docker_base_url, DEFAULT_DOCKER_BASE_URL),
            DeploymentEnvironment::Prod => (&self.prod_base_url, DEFAULT_PROD_BASE_URL),
        };
        configured.as_deref().unwrap_or(fallback)
    }
}

/// Standalone project/research service, outside the gateway scheme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectApiConfig {
    pub base_url: String,
}

impl Default for ProjectApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_PROJECT_API_URL.to_string(),
        }
    }
}

/// HTTP client settings for the default dispatcher
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Whole-request timeout in milliseconds
    pub timeout_ms: u64,
    /// Connect timeout in milliseconds
    pub connect_timeout_ms: u64,
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 60_000,
            connect_timeout_ms: 10_000,
            user_agent: format!("scholar-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Authentication settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Bearer token to seed the session store with
    pub token: Option<String>,
}

impl ClientConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: ClientConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration with environment variable override
    pub fn load() -> Result<Self, ConfigError> {
        ConfigLoader::new().load()
    }

    /// Gateway base URL for the configured environment
    pub fn gateway_base_url(&self) -> &str {
        self.gateway.base_url_for(self.environment)
    }

    /// Reject values that would only fail later at request time
    pub fn validate(&self) -> Result<(), ConfigError> {
        let gateway = [
            ("gateway.dev_base_url", &self.gateway.dev_base_url),
            ("gateway.docker_base_url", &self.gateway.docker_base_url),
            ("gateway.prod_base_url", &self.gateway.prod_base_url),
        ];
        for (field, value) in gateway {
            if let Some(url) = value {
                check_base_url(field, url)?;
            }
        }
        check_base_url("project_api.base_url", &self.project_api.base_url)?;

        if self.http.timeout_ms == 0 {
            return Err(ConfigError::ValidationError(
                "http.timeout_ms must be greater than zero".to_string(),
            ));
        }
        if let Some(token) = &self.auth.token {
            if token.trim().is_empty() {
                return Err(ConfigError::ValidationError(
                    "auth.token must not be blank".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Generate an example TOML configuration
    pub fn example_toml() -> String {
        r#"# ScholarAI client configuration
# Environment variables override these settings

environment = "dev"  # dev, docker, or prod

[gateway]
# Leave unset to use the built-in default for each environment
# dev_base_url = "http://localhost:8989"
# docker_base_url = "http://api-gateway:8989"
# prod_base_url = "http://4.247.29.26:8989"

[project_api]
base_url = "http://localhost:8083/api/v1"

[http]
timeout_ms = 60000
connect_timeout_ms = 10000

[auth]
# token = "eyJ..."
"#
        .to_string()
    }
}

fn check_base_url(field: &str, url: &str) -> Result<(), ConfigError> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::ValidationError(format!("{} must not be blank", field)));
    }
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::ValidationError(format!(
            "{} must start with http:// or https://, got {}",
            field, trimmed
        )));
    }
    Ok(())
}
