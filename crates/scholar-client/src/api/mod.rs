//! Typed facades, one per remote capability

mod ai;
mod bot;
mod documents;
mod extraction;
mod projects;
mod summaries;

pub use ai::{AiAssistanceApi, AiChatRequest, ContentRequest};
pub use bot::{ChatMessageRequest, ChatMessageResponse, ScholarBotApi};
pub use documents::{
    CompileRequest, CreateDocumentRequest, Document, DocumentsApi, GeneratePdfRequest,
    UpdateDocumentRequest,
};
pub use extraction::{ExtractionApi, ExtractionJob, ExtractionStatus, TriggerExtractionRequest};
pub use projects::{
    AddProjectDocumentRequest, CreateProjectRequest, Project, ProjectDocument, ProjectsApi,
};
pub use summaries::{PaperSummary, SummariesApi, SummaryValidationRequest};

use serde::{Deserialize, Deserializer, Serialize};

/// Reads `null` as the type's default. Pair with `#[serde(default)]` so a
/// missing key behaves the same way.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Standard `{status, message, data, timestamp}` response wrapper.
///
/// `data` is only meaningful on success; check [`is_success`](Self::is_success)
/// before relying on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl<T> Envelope<T> {
    /// Envelope status in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn into_data(self) -> Option<T> {
        self.data
    }
}
