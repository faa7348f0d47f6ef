//! ScholarBot chat

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::client::{Call, ScholarClient};
use crate::endpoints;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessageRequest {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,
}

impl ChatMessageRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            session_id: None,
            context: None,
        }
    }

    pub fn in_session(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChatMessageResponse {
    #[serde(deserialize_with = "super::null_as_default")]
    pub response: String,
    pub session_id: Option<String>,
    pub timestamp: Option<String>,
    pub success: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct HealthStatus {
    #[serde(default, deserialize_with = "super::null_as_default")]
    status: String,
}

pub struct ScholarBotApi<'a> {
    client: &'a ScholarClient,
}

impl<'a> ScholarBotApi<'a> {
    pub(crate) fn new(client: &'a ScholarClient) -> Self {
        Self { client }
    }

    pub async fn send_message(&self, request: &ChatMessageRequest) -> Result<ChatMessageResponse> {
        self.client
            .call_json(&endpoints::BOT_MESSAGE, Call::new().json(request)?)
            .await
    }

    /// True only when the bot reports `{"status":"UP"}`. Never fails.
    pub async fn check_health(&self) -> bool {
        match self
            .client
            .call_json::<HealthStatus>(&endpoints::BOT_HEALTH, Call::new())
            .await
        {
            Ok(health) => {
                debug!(status = %health.status, "ScholarBot health");
                health.status == "UP"
            }
            Err(e) => {
                warn!(error = %e, "ScholarBot health check failed");
                false
            }
        }
    }
}
