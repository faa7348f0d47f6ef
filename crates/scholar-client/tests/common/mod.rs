use scholar_client::ScholarClient;
use scholar_config::{ClientConfig, DeploymentEnvironment};
use wiremock::MockServer;

pub const TOKEN: &str = "test-token-123";

/// Config whose gateway and project API both point at the mock server
pub fn config_for(server: &MockServer) -> ClientConfig {
    let mut config = ClientConfig {
        environment: DeploymentEnvironment::Dev,
        ..Default::default()
    };
    config.gateway.dev_base_url = Some(server.uri());
    config.project_api.base_url = format!("{}/api/v1", server.uri());
    config
}

/// Logged-in client against the mock server
pub fn client_for(server: &MockServer) -> ScholarClient {
    scholar_common::logging::init_test_logging();
    let mut config = config_for(server);
    config.auth.token = Some(TOKEN.to_string());
    ScholarClient::new(config).unwrap()
}

/// Client with no credential at all
pub fn anonymous_client_for(server: &MockServer) -> ScholarClient {
    scholar_common::logging::init_test_logging();
    ScholarClient::new(config_for(server)).unwrap()
}
