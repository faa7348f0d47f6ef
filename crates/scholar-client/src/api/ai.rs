//! AI writing assistance for LaTeX documents

use serde::{Deserialize, Serialize};

use super::Envelope;
use crate::client::{Call, ScholarClient};
use crate::endpoint::Endpoint;
use crate::endpoints;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiChatRequest {
    pub message: String,
    /// Text the user has selected in the editor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_text: Option<String>,
    /// Whole document, for context
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_document: Option<String>,
}

impl AiChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            selected_text: None,
            full_document: None,
        }
    }

    pub fn with_selection(mut self, selected_text: impl Into<String>) -> Self {
        self.selected_text = Some(selected_text.into());
        self
    }

    pub fn with_document(mut self, full_document: impl Into<String>) -> Self {
        self.full_document = Some(full_document.into());
        self
    }
}

/// LaTeX content submitted for analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRequest {
    pub content: String,
}

pub struct AiAssistanceApi<'a> {
    client: &'a ScholarClient,
}

impl<'a> AiAssistanceApi<'a> {
    pub(crate) fn new(client: &'a ScholarClient) -> Self {
        Self { client }
    }

    pub async fn chat(&self, request: &AiChatRequest) -> Result<Envelope<String>> {
        self.client
            .call_json(&endpoints::AI_CHAT, Call::new().json(request)?)
            .await
    }

    pub async fn review(&self, content: &str) -> Result<Envelope<String>> {
        self.analyze(&endpoints::AI_REVIEW, content).await
    }

    pub async fn suggestions(&self, content: &str) -> Result<Envelope<String>> {
        self.analyze(&endpoints::AI_SUGGESTIONS, content).await
    }

    pub async fn compliance(&self, content: &str) -> Result<Envelope<String>> {
        self.analyze(&endpoints::AI_COMPLIANCE, content).await
    }

    pub async fn validate_citations(&self, content: &str) -> Result<Envelope<String>> {
        self.analyze(&endpoints::AI_VALIDATE_CITATIONS, content).await
    }

    pub async fn corrections(&self, content: &str) -> Result<Envelope<String>> {
        self.analyze(&endpoints::AI_CORRECTIONS, content).await
    }

    async fn analyze(&self, endpoint: &Endpoint, content: &str) -> Result<Envelope<String>> {
        let request = ContentRequest {
            content: content.to_string(),
        };
        self.client
            .call_json(endpoint, Call::new().json(&request)?)
            .await
    }
}
