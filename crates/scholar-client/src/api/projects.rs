//! Research projects on the standalone project API

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Envelope;
use crate::client::{Call, ScholarClient};
use crate::endpoints;
use crate::error::Result;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub name: String,
    pub description: Option<String>,
    pub domain: Option<String>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub topics: Vec<String>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub tags: Vec<String>,
    pub status: Option<String>,
    pub progress: Option<i32>,
    pub total_papers: Option<i64>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub topics: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Document attached to a research project
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectDocument {
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub project_id: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub title: String,
    pub content: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddProjectDocumentRequest {
    pub project_id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
}

pub struct ProjectsApi<'a> {
    client: &'a ScholarClient,
}

impl<'a> ProjectsApi<'a> {
    pub(crate) fn new(client: &'a ScholarClient) -> Self {
        Self { client }
    }

    pub async fn create_project(
        &self,
        request: &CreateProjectRequest,
    ) -> Result<Envelope<Project>> {
        self.client
            .call_json(&endpoints::PROJECT_CREATE, Call::new().json(request)?)
            .await
    }

    pub async fn list_projects(&self) -> Result<Envelope<Vec<Project>>> {
        self.client
            .call_json(&endpoints::PROJECT_LIST, Call::new())
            .await
    }

    pub async fn get_project(&self, project_id: &str) -> Result<Envelope<Project>> {
        self.client
            .call_json(
                &endpoints::PROJECT_GET,
                Call::new().param("projectId", project_id),
            )
            .await
    }

    pub async fn delete_project(&self, project_id: &str) -> Result<Envelope<Value>> {
        self.client
            .call_json(
                &endpoints::PROJECT_DELETE,
                Call::new().param("projectId", project_id),
            )
            .await
    }

    pub async fn add_document(
        &self,
        request: &AddProjectDocumentRequest,
    ) -> Result<Envelope<ProjectDocument>> {
        self.client
            .call_json(&endpoints::PROJECT_DOCUMENT_ADD, Call::new().json(request)?)
            .await
    }

    pub async fn get_document(&self, document_id: &str) -> Result<Envelope<ProjectDocument>> {
        self.client
            .call_json(
                &endpoints::PROJECT_DOCUMENT_GET,
                Call::new().param("documentId", document_id),
            )
            .await
    }

    pub async fn delete_document(&self, document_id: &str) -> Result<Envelope<Value>> {
        self.client
            .call_json(
                &endpoints::PROJECT_DOCUMENT_DELETE,
                Call::new().param("documentId", document_id),
            )
            .await
    }

    pub async fn list_project_documents(
        &self,
        project_id: &str,
    ) -> Result<Envelope<Vec<ProjectDocument>>> {
        self.client
            .call_json(
                &endpoints::PROJECT_DOCUMENT_LIST,
                Call::new().param("projectId", project_id),
            )
            .await
    }
}
