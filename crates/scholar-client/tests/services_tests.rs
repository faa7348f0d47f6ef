//! Extraction, summary, ScholarBot and project client tests
//!
//! Covers:
//! - Direct (unenveloped) JSON payloads
//! - ScholarBot data unwrapping and health degradation
//! - Standalone project API base URL
//! - Transport errors and timeouts
//! - Concurrent calls

mod common;

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{client_for, config_for, TOKEN};
use scholar_client::api::{
    ChatMessageRequest, CreateProjectRequest, SummaryValidationRequest, TriggerExtractionRequest,
};
use scholar_client::{endpoints, Call, Error, Payload, ScholarClient, StaticCredentials};
use std::sync::Arc;

#[tokio::test]
async fn test_is_extracted_bare_boolean() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/project-service/api/v1/extraction/extracted/p-1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("true"))
        .mount(&server)
        .await;

    assert!(client_for(&server).extraction().is_extracted("p-1").await.unwrap());
}

#[tokio::test]
async fn test_extraction_trigger_and_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/project-service/api/v1/extraction/trigger"))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({
            "paperId": "p-1", "jobId": "job-7", "status": "PROCESSING"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/project-service/api/v1/extraction/trigger/p-2"))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({
            "paperId": "p-2", "status": "PENDING"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/project-service/api/v1/extraction/status/p-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "paperId": "p-1", "status": "COMPLETED", "progress": 100.0
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let extraction = client.extraction();

    let job = extraction
        .trigger(&TriggerExtractionRequest::new("p-1"))
        .await
        .unwrap();
    assert_eq!(job.job_id.as_deref(), Some("job-7"));

    let job = extraction.trigger_for_paper("p-2").await.unwrap();
    assert_eq!(job.status, "PENDING");

    let status = extraction.status("p-1").await.unwrap();
    assert!(status.is_completed());
    assert_eq!(status.progress, Some(100.0));
}

#[tokio::test]
async fn test_summary_lifecycle() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/project-service/api/v1/papers/p-1/summary/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "paperId": "p-1", "oneLiner": "first"
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/project-service/api/v1/papers/p-1/summary/regenerate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "paperId": "p-1", "oneLiner": "second"
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/project-service/api/v1/papers/p-1/summary"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "paperId": "p-1", "oneLiner": "second", "keyContributions": ["k"]
        })))
        .mount(&server)
        .await;

    Mock::given(method("PATCH"))
        .and(path("/project-service/api/v1/papers/p-1/summary/validation"))
        .and(body_json(json!({"validationStatus": "VALIDATED", "validationNotes": "checked"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "paperId": "p-1", "validationStatus": "VALIDATED"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let summaries = client.summaries();

    assert_eq!(summaries.generate("p-1").await.unwrap().one_liner.as_deref(), Some("first"));
    assert_eq!(summaries.regenerate("p-1").await.unwrap().one_liner.as_deref(), Some("second"));
    assert_eq!(summaries.get("p-1").await.unwrap().key_contributions, vec!["k"]);

    let validated = summaries
        .update_validation(
            "p-1",
            &SummaryValidationRequest {
                validation_status: "VALIDATED".to_string(),
                validation_notes: Some("checked".to_string()),
            },
        )
        .await
        .unwrap();
    assert_eq!(validated.validation_status.as_deref(), Some("VALIDATED"));
}

#[tokio::test]
async fn test_summary_missing_is_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/project-service/api/v1/papers/p-404/summary"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client_for(&server).summaries().get("p-404").await.unwrap_err();
    assert_eq!(err.to_string(), "HTTP error! status: 404");
}

#[tokio::test]
async fn test_bot_message_unwraps_data() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat/message"))
        .and(body_json(json!({"message": "hello", "sessionId": "s-1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": 200,
            "message": "ok",
            "data": {"response": "Hi there", "sessionId": "s-1"}
        })))
        .mount(&server)
        .await;

    let reply = client_for(&server)
        .bot()
        .send_message(&ChatMessageRequest::new("hello").in_session("s-1"))
        .await
        .unwrap();

    assert_eq!(reply.response, "Hi there");
    assert_eq!(reply.session_id.as_deref(), Some("s-1"));
}

#[tokio::test]
async fn test_bot_message_plain_object() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat/message"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": "direct"})))
        .mount(&server)
        .await;

    let reply = client_for(&server)
        .bot()
        .send_message(&ChatMessageRequest::new("hello"))
        .await
        .unwrap();
    assert_eq!(reply.response, "direct");
}

#[tokio::test]
async fn test_raw_mode_array_passthrough() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat/message"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([1, 2, 3])))
        .mount(&server)
        .await;

    let payload = client_for(&server)
        .call(
            &endpoints::BOT_MESSAGE,
            Call::new().json(&json!({"message": "list"})).unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(payload, Payload::Json(json!([1, 2, 3])));
}

#[tokio::test]
async fn test_bot_health() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/chat/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "UP"})))
        .mount(&server)
        .await;

    // health is anonymous, so no token is needed
    let client = ScholarClient::new(config_for(&server)).unwrap();
    assert!(client.bot().check_health().await);
}

#[tokio::test]
async fn test_bot_health_reads_top_level_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/chat/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "UP",
            "data": {"model": "scholarbot", "uptime": 3600}
        })))
        .mount(&server)
        .await;

    let client = ScholarClient::new(config_for(&server)).unwrap();
    assert!(client.bot().check_health().await);
}

#[tokio::test]
async fn test_bot_health_down_or_failing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/chat/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "DOWN"})))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/chat/health"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert!(!client.bot().check_health().await);
    assert!(!client.bot().check_health().await);
}

#[tokio::test]
async fn test_bot_health_network_error() {
    let server = MockServer::start().await;
    let mut config = config_for(&server);
    // nothing listens on port 1
    config.gateway.dev_base_url = Some("http://127.0.0.1:1".to_string());
    drop(server);

    let client = ScholarClient::new(config).unwrap();
    assert!(!client.bot().check_health().await);
}

#[tokio::test]
async fn test_network_error_surfaces_verbatim() {
    let server = MockServer::start().await;
    let mut config = config_for(&server);
    config.gateway.dev_base_url = Some("http://127.0.0.1:1".to_string());
    config.auth.token = Some(TOKEN.to_string());

    let client = ScholarClient::new(config).unwrap();
    let err = client.documents().get("1").await.unwrap_err();
    assert!(matches!(err, Error::Dispatch(_)));
}

#[tokio::test]
async fn test_timeout_is_a_dispatch_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/project-service/api/v1/extraction/status/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"paperId": "slow", "status": "PENDING"}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let mut config = config_for(&server);
    config.http.timeout_ms = 200;
    config.auth.token = Some(TOKEN.to_string());
    let client = ScholarClient::new(config).unwrap();

    match client.extraction().status("slow").await {
        Err(Error::Dispatch(e)) => assert!(e.is_timeout()),
        other => panic!("expected timeout, got {:?}", other),
    }
}

#[tokio::test]
async fn test_projects_use_standalone_base() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/projects"))
        .and(body_json(json!({"name": "Survey", "tags": ["nlp"]})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "status": 201,
            "message": "Project created",
            "data": {"id": "p-1", "name": "Survey", "tags": ["nlp"]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": 200, "message": "ok", "data": [{"id": "p-1", "name": "Survey"}]
        })))
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/projects/p-1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"status": 200, "message": "Deleted"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let projects = client.projects();

    let created = projects
        .create_project(&CreateProjectRequest {
            name: "Survey".to_string(),
            tags: vec!["nlp".to_string()],
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(created.data.unwrap().id, "p-1");

    let listed = projects.list_projects().await.unwrap();
    assert_eq!(listed.data.unwrap().len(), 1);

    let deleted = projects.delete_project("p-1").await.unwrap();
    assert_eq!(deleted.message, "Deleted");
}

#[tokio::test]
async fn test_project_documents() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/documents/project/p-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": 200,
            "message": "ok",
            "data": [{"id": "d-1", "projectId": "p-1", "title": "notes"}]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/documents/d-1"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({"message": "Access denied"})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let documents = client.projects().list_project_documents("p-1").await.unwrap();
    assert_eq!(documents.data.unwrap()[0].title, "notes");

    let err = client.projects().get_document("d-1").await.unwrap_err();
    assert_eq!(err.to_string(), "Access denied");
    assert_eq!(err.status(), Some(403));
}

#[tokio::test]
async fn test_concurrent_calls_complete_independently() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/project-service/api/v1/extraction/extracted/a"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("true")
                .set_delay(Duration::from_millis(100)),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/project-service/api/v1/extraction/extracted/b"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"message": "b failed"})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let extraction = client.extraction();
    let (a, b) = tokio::join!(extraction.is_extracted("a"), extraction.is_extracted("b"));

    assert!(a.unwrap());
    assert_eq!(b.unwrap_err().to_string(), "b failed");
}

#[tokio::test]
async fn test_injected_credentials() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/project-service/api/v1/extraction/extracted/p-1"))
        .and(wiremock::matchers::header("Authorization", "Bearer injected"))
        .respond_with(ResponseTemplate::new(200).set_body_string("false"))
        .expect(1)
        .mount(&server)
        .await;

    let client = ScholarClient::builder(config_for(&server))
        .with_credentials(Arc::new(StaticCredentials::new("injected")))
        .build()
        .unwrap();

    assert!(client.session().is_none());
    assert!(!client.extraction().is_extracted("p-1").await.unwrap());
}
