//! Paper summaries

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::{Call, ScholarClient};
use crate::endpoint::Endpoint;
use crate::endpoints;
use crate::error::Result;

/// Structured summary of a paper.
///
/// Fields the client does not model are kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaperSummary {
    pub id: Option<String>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub paper_id: String,
    pub one_liner: Option<String>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub key_contributions: Vec<String>,
    pub method_overview: Option<String>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub main_findings: Vec<Value>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub limitations: Vec<String>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub future_work: Vec<String>,
    pub validation_status: Option<String>,
    pub validation_notes: Option<String>,
    pub generated_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryValidationRequest {
    pub validation_status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_notes: Option<String>,
}

pub struct SummariesApi<'a> {
    client: &'a ScholarClient,
}

impl<'a> SummariesApi<'a> {
    pub(crate) fn new(client: &'a ScholarClient) -> Self {
        Self { client }
    }

    pub async fn generate(&self, paper_id: &str) -> Result<PaperSummary> {
        self.for_paper(&endpoints::SUMMARY_GENERATE, paper_id).await
    }

    /// Discard the stored summary and produce a new one
    pub async fn regenerate(&self, paper_id: &str) -> Result<PaperSummary> {
        self.for_paper(&endpoints::SUMMARY_REGENERATE, paper_id).await
    }

    pub async fn get(&self, paper_id: &str) -> Result<PaperSummary> {
        self.for_paper(&endpoints::SUMMARY_GET, paper_id).await
    }

    pub async fn update_validation(
        &self,
        paper_id: &str,
        request: &SummaryValidationRequest,
    ) -> Result<PaperSummary> {
        let call = Call::new().param("paperId", paper_id).json(request)?;
        self.client
            .call_json(&endpoints::SUMMARY_VALIDATION, call)
            .await
    }

    async fn for_paper(&self, endpoint: &Endpoint, paper_id: &str) -> Result<PaperSummary> {
        self.client
            .call_json(endpoint, Call::new().param("paperId", paper_id))
            .await
    }
}
