//! LaTeX document management

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Envelope;
use crate::client::{Call, ScholarClient};
use crate::endpoints;
use crate::error::Result;

/// A LaTeX document stored by the document service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Document {
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub project_id: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub content: String,
    pub document_type: Option<String>,
    pub file_extension: Option<String>,
    pub file_size: Option<i64>,
    pub version: Option<i32>,
    pub is_auto_saved: Option<bool>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub last_accessed: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDocumentRequest {
    pub project_id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDocumentRequest {
    pub document_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompileRequest {
    pub latex_content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePdfRequest {
    pub latex_content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

/// Document service operations
pub struct DocumentsApi<'a> {
    client: &'a ScholarClient,
}

impl<'a> DocumentsApi<'a> {
    pub(crate) fn new(client: &'a ScholarClient) -> Self {
        Self { client }
    }

    pub async fn create(&self, request: &CreateDocumentRequest) -> Result<Envelope<Document>> {
        self.client
            .call_json(&endpoints::DOCUMENT_CREATE, Call::new().json(request)?)
            .await
    }

    /// Create an empty document named `file_name` in a project
    pub async fn create_with_name(
        &self,
        project_id: &str,
        file_name: &str,
    ) -> Result<Envelope<Document>> {
        let call = Call::new()
            .query("projectId", project_id)
            .query("fileName", file_name);
        self.client
            .call_json(&endpoints::DOCUMENT_CREATE_WITH_NAME, call)
            .await
    }

    pub async fn list_by_project(&self, project_id: &str) -> Result<Envelope<Vec<Document>>> {
        self.client
            .call_json(
                &endpoints::DOCUMENT_LIST_BY_PROJECT,
                Call::new().param("projectId", project_id),
            )
            .await
    }

    pub async fn get(&self, id: &str) -> Result<Envelope<Document>> {
        self.client
            .call_json(&endpoints::DOCUMENT_GET, Call::new().param("id", id))
            .await
    }

    pub async fn update(&self, request: &UpdateDocumentRequest) -> Result<Envelope<Document>> {
        self.client
            .call_json(&endpoints::DOCUMENT_UPDATE, Call::new().json(request)?)
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<Envelope<Value>> {
        self.client
            .call_json(&endpoints::DOCUMENT_DELETE, Call::new().param("id", id))
            .await
    }

    /// Compile LaTeX source; `data` holds the rendered output
    pub async fn compile(&self, latex_content: &str) -> Result<Envelope<String>> {
        let request = CompileRequest {
            latex_content: latex_content.to_string(),
        };
        self.client
            .call_json(&endpoints::DOCUMENT_COMPILE, Call::new().json(&request)?)
            .await
    }

    /// Render LaTeX to PDF bytes
    pub async fn generate_pdf(&self, request: &GeneratePdfRequest) -> Result<Bytes> {
        self.client
            .call_bytes(&endpoints::DOCUMENT_GENERATE_PDF, Call::new().json(request)?)
            .await
    }
}
