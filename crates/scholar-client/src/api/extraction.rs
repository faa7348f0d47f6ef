//! Paper content extraction

use serde::{Deserialize, Serialize};

use crate::client::{Call, ScholarClient};
use crate::endpoints;
use crate::error::Result;

/// Extraction options; every stage is on by default
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerExtractionRequest {
    pub paper_id: String,
    pub extract_text: bool,
    pub extract_figures: bool,
    pub extract_tables: bool,
    pub extract_equations: bool,
    pub extract_code: bool,
    pub extract_references: bool,
    pub use_ocr: bool,
    pub detect_entities: bool,
    /// Re-run even when the paper was already extracted
    pub force_reextraction: bool,
}

impl TriggerExtractionRequest {
    pub fn new(paper_id: impl Into<String>) -> Self {
        Self {
            paper_id: paper_id.into(),
            extract_text: true,
            extract_figures: true,
            extract_tables: true,
            extract_equations: true,
            extract_code: true,
            extract_references: true,
            use_ocr: true,
            detect_entities: true,
            force_reextraction: false,
        }
    }

    pub fn force(mut self) -> Self {
        self.force_reextraction = true;
        self
    }
}

/// Acknowledgement for a started extraction
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtractionJob {
    #[serde(deserialize_with = "super::null_as_default")]
    pub paper_id: String,
    pub job_id: Option<String>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub status: String,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtractionStatus {
    #[serde(deserialize_with = "super::null_as_default")]
    pub paper_id: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub status: String,
    pub progress: Option<f64>,
    pub message: Option<String>,
    pub is_extracted: Option<bool>,
    pub extraction_id: Option<String>,
    pub started_at: Option<String>,
    pub completed_at: Option<String>,
    pub error: Option<String>,
}

impl ExtractionStatus {
    pub fn is_completed(&self) -> bool {
        self.status.eq_ignore_ascii_case("COMPLETED")
    }

    pub fn is_failed(&self) -> bool {
        self.status.eq_ignore_ascii_case("FAILED")
    }
}

pub struct ExtractionApi<'a> {
    client: &'a ScholarClient,
}

impl<'a> ExtractionApi<'a> {
    pub(crate) fn new(client: &'a ScholarClient) -> Self {
        Self { client }
    }

    pub async fn trigger(&self, request: &TriggerExtractionRequest) -> Result<ExtractionJob> {
        self.client
            .call_json(&endpoints::EXTRACTION_TRIGGER, Call::new().json(request)?)
            .await
    }

    /// Start extraction for a paper with the service's default options
    pub async fn trigger_for_paper(&self, paper_id: &str) -> Result<ExtractionJob> {
        self.client
            .call_json(
                &endpoints::EXTRACTION_TRIGGER_FOR_PAPER,
                Call::new().param("paperId", paper_id),
            )
            .await
    }

    pub async fn status(&self, paper_id: &str) -> Result<ExtractionStatus> {
        self.client
            .call_json(
                &endpoints::EXTRACTION_STATUS,
                Call::new().param("paperId", paper_id),
            )
            .await
    }

    pub async fn is_extracted(&self, paper_id: &str) -> Result<bool> {
        self.client
            .call_json(
                &endpoints::EXTRACTION_IS_EXTRACTED,
                Call::new().param("paperId", paper_id),
            )
            .await
    }
}
