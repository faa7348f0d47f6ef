//! Endpoint table for every supported operation

use reqwest::Method;

use crate::endpoint::{Access, Endpoint, Target};
use crate::normalize::ResponseMode;

/// Microservice hosting documents, AI assistance, extraction and summaries
pub const PROJECT_SERVICE: &str = "project-service";

const PROJECT: Target = Target::Service(PROJECT_SERVICE);

const fn authed(
    name: &'static str,
    target: Target,
    method: Method,
    path: &'static str,
    mode: ResponseMode,
) -> Endpoint {
    Endpoint {
        name,
        target,
        method,
        path,
        mode,
        access: Access::Authenticated,
    }
}

// Documents
pub const DOCUMENT_CREATE: Endpoint =
    authed("documents.create", PROJECT, Method::POST, "/api/documents", ResponseMode::Envelope);
pub const DOCUMENT_CREATE_WITH_NAME: Endpoint = authed(
    "documents.create_with_name",
    PROJECT,
    Method::POST,
    "/api/documents/create-with-name",
    ResponseMode::Envelope,
);
pub const DOCUMENT_LIST_BY_PROJECT: Endpoint = authed(
    "documents.list_by_project",
    PROJECT,
    Method::GET,
    "/api/documents/project/{projectId}",
    ResponseMode::Envelope,
);
pub const DOCUMENT_GET: Endpoint =
    authed("documents.get", PROJECT, Method::GET, "/api/documents/{id}", ResponseMode::Envelope);
pub const DOCUMENT_UPDATE: Endpoint =
    authed("documents.update", PROJECT, Method::PUT, "/api/documents", ResponseMode::Envelope);
pub const DOCUMENT_DELETE: Endpoint = authed(
    "documents.delete",
    PROJECT,
    Method::DELETE,
    "/api/documents/{id}",
    ResponseMode::Envelope,
);
pub const DOCUMENT_COMPILE: Endpoint = authed(
    "documents.compile",
    PROJECT,
    Method::POST,
    "/api/documents/compile",
    ResponseMode::Envelope,
);
pub const DOCUMENT_GENERATE_PDF: Endpoint = authed(
    "documents.generate_pdf",
    PROJECT,
    Method::POST,
    "/api/documents/generate-pdf",
    ResponseMode::Blob,
);

// AI assistance
pub const AI_CHAT: Endpoint =
    authed("ai.chat", PROJECT, Method::POST, "/api/ai-assistance/chat", ResponseMode::Envelope);
pub const AI_REVIEW: Endpoint = authed(
    "ai.review",
    PROJECT,
    Method::POST,
    "/api/ai-assistance/review",
    ResponseMode::Envelope,
);
pub const AI_SUGGESTIONS: Endpoint = authed(
    "ai.suggestions",
    PROJECT,
    Method::POST,
    "/api/ai-assistance/suggestions",
    ResponseMode::Envelope,
);
pub const AI_COMPLIANCE: Endpoint = authed(
    "ai.compliance",
    PROJECT,
    Method::POST,
    "/api/ai-assistance/compliance",
    ResponseMode::Envelope,
);
pub const AI_VALIDATE_CITATIONS: Endpoint = authed(
    "ai.validate_citations",
    PROJECT,
    Method::POST,
    "/api/ai-assistance/citations/validate",
    ResponseMode::Envelope,
);
pub const AI_CORRECTIONS: Endpoint = authed(
    "ai.corrections",
    PROJECT,
    Method::POST,
    "/api/ai-assistance/corrections",
    ResponseMode::Envelope,
);

// Extraction
pub const EXTRACTION_TRIGGER: Endpoint = authed(
    "extraction.trigger",
    PROJECT,
    Method::POST,
    "/api/v1/extraction/trigger",
    ResponseMode::Direct,
);
pub const EXTRACTION_TRIGGER_FOR_PAPER: Endpoint = authed(
    "extraction.trigger_for_paper",
    PROJECT,
    Method::POST,
    "/api/v1/extraction/trigger/{paperId}",
    ResponseMode::Direct,
);
pub const EXTRACTION_STATUS: Endpoint = authed(
    "extraction.status",
    PROJECT,
    Method::GET,
    "/api/v1/extraction/status/{paperId}",
    ResponseMode::Direct,
);
pub const EXTRACTION_IS_EXTRACTED: Endpoint = authed(
    "extraction.is_extracted",
    PROJECT,
    Method::GET,
    "/api/v1/extraction/extracted/{paperId}",
    ResponseMode::Direct,
);

// Summaries
pub const SUMMARY_GENERATE: Endpoint = authed(
    "summaries.generate",
    PROJECT,
    Method::POST,
    "/api/v1/papers/{paperId}/summary/generate",
    ResponseMode::Direct,
);
pub const SUMMARY_REGENERATE: Endpoint = authed(
    "summaries.regenerate",
    PROJECT,
    Method::POST,
    "/api/v1/papers/{paperId}/summary/regenerate",
    ResponseMode::Direct,
);
pub const SUMMARY_GET: Endpoint = authed(
    "summaries.get",
    PROJECT,
    Method::GET,
    "/api/v1/papers/{paperId}/summary",
    ResponseMode::Direct,
);
pub const SUMMARY_VALIDATION: Endpoint = authed(
    "summaries.update_validation",
    PROJECT,
    Method::PATCH,
    "/api/v1/papers/{paperId}/summary/validation",
    ResponseMode::Direct,
);

// ScholarBot
pub const BOT_MESSAGE: Endpoint =
    authed("bot.message", Target::Gateway, Method::POST, "/api/chat/message", ResponseMode::Raw);
pub const BOT_HEALTH: Endpoint = Endpoint {
    name: "bot.health",
    target: Target::Gateway,
    method: Method::GET,
    path: "/api/chat/health",
    // status is read from the top-level object, never from `data`
    mode: ResponseMode::Direct,
    access: Access::Anonymous,
};

// Standalone project API
pub const PROJECT_CREATE: Endpoint = authed(
    "projects.create",
    Target::ProjectApi,
    Method::POST,
    "/projects",
    ResponseMode::Envelope,
);
pub const PROJECT_LIST: Endpoint =
    authed("projects.list", Target::ProjectApi, Method::GET, "/projects", ResponseMode::Envelope);
pub const PROJECT_GET: Endpoint = authed(
    "projects.get",
    Target::ProjectApi,
    Method::GET,
    "/projects/{projectId}",
    ResponseMode::Envelope,
);
pub const PROJECT_DELETE: Endpoint = authed(
    "projects.delete",
    Target::ProjectApi,
    Method::DELETE,
    "/projects/{projectId}",
    ResponseMode::Envelope,
);
pub const PROJECT_DOCUMENT_ADD: Endpoint = authed(
    "projects.add_document",
    Target::ProjectApi,
    Method::POST,
    "/documents",
    ResponseMode::Envelope,
);
pub const PROJECT_DOCUMENT_GET: Endpoint = authed(
    "projects.get_document",
    Target::ProjectApi,
    Method::GET,
    "/documents/{documentId}",
    ResponseMode::Envelope,
);
pub const PROJECT_DOCUMENT_DELETE: Endpoint = authed(
    "projects.delete_document",
    Target::ProjectApi,
    Method::DELETE,
    "/documents/{documentId}",
    ResponseMode::Envelope,
);
pub const PROJECT_DOCUMENT_LIST: Endpoint = authed(
    "projects.list_documents",
    Target::ProjectApi,
    Method::GET,
    "/documents/project/{projectId}",
    ResponseMode::Envelope,
);

/// Every endpoint the clients can call
pub const ALL: &[Endpoint] = &[
    DOCUMENT_CREATE,
    DOCUMENT_CREATE_WITH_NAME,
    DOCUMENT_LIST_BY_PROJECT,
    DOCUMENT_GET,
    DOCUMENT_UPDATE,
    DOCUMENT_DELETE,
    DOCUMENT_COMPILE,
    DOCUMENT_GENERATE_PDF,
    AI_CHAT,
    AI_REVIEW,
    AI_SUGGESTIONS,
    AI_COMPLIANCE,
    AI_VALIDATE_CITATIONS,
    AI_CORRECTIONS,
    EXTRACTION_TRIGGER,
    EXTRACTION_TRIGGER_FOR_PAPER,
    EXTRACTION_STATUS,
    EXTRACTION_IS_EXTRACTED,
    SUMMARY_GENERATE,
    SUMMARY_REGENERATE,
    SUMMARY_GET,
    SUMMARY_VALIDATION,
    BOT_MESSAGE,
    BOT_HEALTH,
    PROJECT_CREATE,
    PROJECT_LIST,
    PROJECT_GET,
    PROJECT_DELETE,
    PROJECT_DOCUMENT_ADD,
    PROJECT_DOCUMENT_GET,
    PROJECT_DOCUMENT_DELETE,
    PROJECT_DOCUMENT_LIST,
];

/// Look up an endpoint by its log name
pub fn by_name(name: &str) -> Option<&'static Endpoint> {
    ALL.iter().find(|endpoint| endpoint.name == name)
}
