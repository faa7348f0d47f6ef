//! Configuration loader with file and environment variable support

use crate::{ClientConfig, ConfigError};
use std::env;
use std::path::PathBuf;
use tracing::info;

/// Standard config file search paths
const CONFIG_PATHS: &[&str] = &[
    "scholar.toml",
    "config.toml",
    "./config/scholar.toml",
];

/// Configuration loader
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader
    pub fn new() -> Self {
        Self { config_path: None }
    }

    /// Create a loader with a specific config file path
    pub fn with_path<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            config_path: Some(path.into()),
        }
    }

    /// Load configuration from file (if found) with environment variable overrides
    pub fn load(&self) -> Result<ClientConfig, ConfigError> {
        self.load_with(|key| env::var(key).ok())
    }

    /// Same as [`load`](Self::load) with an explicit variable lookup.
    pub fn load_with<F>(&self, lookup: F) -> Result<ClientConfig, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ClientConfig::default();

        if let Some(path) = self.find_config_file(&lookup) {
            info!(?path, "Loading configuration from file");
            config = ClientConfig::from_file(&path)?;
        }

        apply_overrides(&mut config, &lookup)?;
        config.validate()?;

        info!(
            environment = %config.environment,
            gateway = %config.gateway_base_url(),
            "Client configuration loaded"
        );
        Ok(config)
    }

    /// Find the configuration file to use
    fn find_config_file<F>(&self, lookup: &F) -> Option<PathBuf>
    where
        F: Fn(&str) -> Option<String>,
    {
        // An explicit path is authoritative, even when missing
        if let Some(path) = &self.config_path {
            return path.exists().then(|| path.clone());
        }

        if let Some(path) = lookup("SCHOLAR_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        CONFIG_PATHS
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply environment variable overrides
fn apply_overrides<F>(config: &mut ClientConfig, lookup: &F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(val) = lookup("SCHOLAR_ENV") {
        config.environment = val.parse()?;
    }

    // Gateway
    if let Some(val) = lookup("SCHOLAR_DEV_BASE_URL") {
        config.gateway.dev_base_url = Some(val);
    }
    if let Some(val) = lookup("SCHOLAR_DOCKER_BASE_URL") {
        config.gateway.docker_base_url = Some(val);
    }
    if let Some(val) = lookup("SCHOLAR_PROD_BASE_URL") {
        config.gateway.prod_base_url = Some(val);
    }

    // Project API
    if let Some(val) = lookup("SCHOLAR_PROJECT_API_URL") {
        config.project_api.base_url = val;
    }

    // HTTP
    if let Some(val) = lookup("SCHOLAR_HTTP_TIMEOUT_MS") {
        config.http.timeout_ms = parse_number("SCHOLAR_HTTP_TIMEOUT_MS", &val)?;
    }
    if let Some(val) = lookup("SCHOLAR_HTTP_CONNECT_TIMEOUT_MS") {
        config.http.connect_timeout_ms = parse_number("SCHOLAR_HTTP_CONNECT_TIMEOUT_MS", &val)?;
    }

    // Auth
    if let Some(val) = lookup("SCHOLAR_AUTH_TOKEN") {
        config.auth.token = Some(val);
    }

    Ok(())
}

fn parse_number(key: &str, value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::EnvError(format!("{} must be a number, got {:?}", key, value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DeploymentEnvironment;
    use std::collections::HashMap;
    use std::io::Write;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn missing_path() -> PathBuf {
        PathBuf::from("/nonexistent/scholar-config-test.toml")
    }

    #[test]
    fn test_defaults_without_file_or_env() {
        let config = ConfigLoader::with_path(missing_path()).load_with(vars(&[])).unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_env_overrides_apply() {
        let lookup = vars(&[
            ("SCHOLAR_ENV", "prod"),
            ("SCHOLAR_PROD_BASE_URL", "https://gateway.scholar.example"),
            ("SCHOLAR_PROJECT_API_URL", "https://projects.scholar.example/api/v1"),
            ("SCHOLAR_HTTP_TIMEOUT_MS", "1500"),
            ("SCHOLAR_AUTH_TOKEN", "secret-token"),
        ]);
        let config = ConfigLoader::with_path(missing_path()).load_with(lookup).unwrap();

        assert_eq!(config.environment, DeploymentEnvironment::Prod);
        assert_eq!(config.gateway_base_url(), "https://gateway.scholar.example");
        assert_eq!(config.project_api.base_url, "https://projects.scholar.example/api/v1");
        assert_eq!(config.http.timeout_ms, 1500);
        assert_eq!(config.auth.token.as_deref(), Some("secret-token"));
    }

    #[test]
    fn test_bad_environment_is_rejected() {
        let result =
            ConfigLoader::with_path(missing_path()).load_with(vars(&[("SCHOLAR_ENV", "qa")]));
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_bad_timeout_is_rejected() {
        let result = ConfigLoader::with_path(missing_path())
            .load_with(vars(&[("SCHOLAR_HTTP_TIMEOUT_MS", "soon")]));
        assert!(matches!(result, Err(ConfigError::EnvError(_))));
    }

    #[test]
    fn test_file_then_env() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
environment = "docker"

[gateway]
docker_base_url = "http://gateway:7000"

[http]
timeout_ms = 5000
"#
        )
        .unwrap();

        let loader = ConfigLoader::with_path(file.path());
        let config = loader.load_with(vars(&[])).unwrap();
        assert_eq!(config.environment, DeploymentEnvironment::Docker);
        assert_eq!(config.gateway_base_url(), "http://gateway:7000");
        assert_eq!(config.http.timeout_ms, 5000);
        assert_eq!(config.http.connect_timeout_ms, 10_000);

        let config = loader
            .load_with(vars(&[("SCHOLAR_DOCKER_BASE_URL", "http://other:7001")]))
            .unwrap();
        assert_eq!(config.gateway_base_url(), "http://other:7001");
    }

    #[test]
    fn test_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "environment = [").unwrap();
        let result = ConfigLoader::with_path(file.path()).load_with(vars(&[]));
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }
}
