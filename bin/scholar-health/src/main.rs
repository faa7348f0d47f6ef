//! ScholarAI Health Probe
//!
//! Loads the client configuration, logs where every endpoint resolves for
//! the selected environment and checks that ScholarBot answers its health
//! endpoint. Exits non-zero when the bot is unhealthy.
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `SCHOLAR_CONFIG` | - | Path to a TOML config file |
//! | `SCHOLAR_ENV` | `dev` | Deployment environment: `dev`, `docker`, `prod` |
//! | `SCHOLAR_DEV_BASE_URL` | `http://localhost:8989` | Gateway override for `dev` |
//! | `SCHOLAR_DOCKER_BASE_URL` | `http://api-gateway:8989` | Gateway override for `docker` |
//! | `SCHOLAR_PROD_BASE_URL` | `http://4.247.29.26:8989` | Gateway override for `prod` |
//! | `SCHOLAR_PROJECT_API_URL` | `http://localhost:8083/api/v1` | Standalone project API |
//! | `SCHOLAR_HTTP_TIMEOUT_MS` | `60000` | Request timeout |
//! | `LOG_FORMAT` | `text` | `json` for structured output |
//! | `RUST_LOG` | `info` | Log level |

use anyhow::{Context, Result};
use tracing::{error, info};

use scholar_client::{endpoints, Call, ScholarClient};
use scholar_config::ConfigLoader;

#[tokio::main]
async fn main() -> Result<()> {
    scholar_common::logging::init_logging("scholar-health");

    let config = ConfigLoader::new().load().context("Failed to load configuration")?;
    info!(
        environment = %config.environment,
        gateway = %config.gateway_base_url(),
        project_api = %config.project_api.base_url,
        "Starting ScholarAI health probe"
    );

    let client = ScholarClient::new(config).context("Failed to build client")?;

    for endpoint in endpoints::ALL {
        let call = endpoint
            .placeholders()
            .into_iter()
            .fold(Call::new(), |call, name| call.param(name, name));
        let url = client.url_for(endpoint, &call)?;
        info!(endpoint = endpoint.name, method = %endpoint.method, %url, "Resolved");
    }

    if client.bot().check_health().await {
        info!("ScholarBot is UP");
        Ok(())
    } else {
        error!("ScholarBot is not healthy");
        std::process::exit(1);
    }
}
