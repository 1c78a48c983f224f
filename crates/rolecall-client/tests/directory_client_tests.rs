//! # Integration Tests for the Directory HTTP Client
//!
//! Exercises `DirectoryClient` against wiremock servers to verify request
//! construction, both list response shapes, partial-body merging, and the
//! error taxonomy, without a live backend.

use rolecall_client::{ClientConfig, DirectoryClient, Resource};
use rolecall_core::{RecordDraft, RecordId};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> DirectoryClient {
    let config = ClientConfig::new(&server.uri()).expect("valid base url");
    DirectoryClient::new(config).expect("client build")
}

fn draft() -> RecordDraft {
    RecordDraft {
        company: "Acme".into(),
        location: "Gurgaon and Noida".into(),
        title: Some("Backend Engineer".into()),
        url: Some("https://acme.example/jobs/1".into()),
    }
}

// ── List ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_parses_bare_array() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/companies"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": "a", "company": "Acme", "location": "Gurgaon"},
            {"id": "b", "company": "Beta", "location": "Noida", "url": "https://beta.example"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let records = client(&server).list(None).await.expect("list");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id.as_str(), "a");
    assert_eq!(records[1].url.as_deref(), Some("https://beta.example"));
}

#[tokio::test]
async fn list_parses_items_wrapper() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/companies"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "items": [{"id": "a", "company": "Acme", "location": "Remote"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let records = client(&server).list(None).await.expect("list");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].location, "Remote");
}

#[tokio::test]
async fn list_passes_location_query_param() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/companies"))
        .and(query_param("location", "gurgaon"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let records = client(&server).list(Some("gurgaon")).await.expect("list");
    assert!(records.is_empty());
}

#[tokio::test]
async fn list_uses_configured_resource_path() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/roles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let config = ClientConfig::new(&server.uri())
        .expect("valid base url")
        .with_resource(Resource::Roles);
    let client = DirectoryClient::new(config).expect("client build");
    client.list(None).await.expect("list");
}

#[tokio::test]
async fn list_non_2xx_maps_to_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/companies"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client(&server).list(None).await.expect_err("must fail");
    match &err {
        rolecall_client::ClientError::Api { status, body, .. } => {
            assert_eq!(*status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
    assert!(err.is_unreachable());
}

#[tokio::test]
async fn list_malformed_body_maps_to_deserialization_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/companies"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client(&server).list(None).await.expect_err("must fail");
    assert!(matches!(
        err,
        rolecall_client::ClientError::Deserialization { .. }
    ));
    assert!(!err.is_unreachable());
}

#[tokio::test]
async fn connection_refused_is_unreachable() {
    // Port 1 is never listening.
    let config = ClientConfig::new("http://127.0.0.1:1")
        .expect("valid base url")
        .with_timeout_secs(1);
    let client = DirectoryClient::new(config).expect("client build");

    let err = client.list(None).await.expect_err("must fail");
    assert!(matches!(err, rolecall_client::ClientError::Http { .. }));
    assert!(err.is_unreachable());
}

// ── Create / Update / Delete ─────────────────────────────────────────────

#[tokio::test]
async fn create_sends_draft_and_returns_full_record() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/companies"))
        .and(body_json(serde_json::json!({
            "company": "Acme",
            "location": "Gurgaon and Noida",
            "title": "Backend Engineer",
            "url": "https://acme.example/jobs/1"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": "r-123",
            "company": "Acme",
            "location": "Gurgaon and Noida",
            "title": "Backend Engineer",
            "url": "https://acme.example/jobs/1",
            "created_at": "2026-08-07T09:00:00Z",
            "updated_at": "2026-08-07T09:00:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let record = client(&server).create(&draft()).await.expect("create");
    assert_eq!(record.id.as_str(), "r-123");
    assert!(record.created_at.is_some());
}

#[tokio::test]
async fn create_merges_partial_response_over_draft() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/companies"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(serde_json::json!({"id": "r-9"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let record = client(&server).create(&draft()).await.expect("create");
    assert_eq!(record.id.as_str(), "r-9");
    assert_eq!(record.company, "Acme");
    assert_eq!(record.location, "Gurgaon and Noida");
    assert_eq!(record.title.as_deref(), Some("Backend Engineer"));
}

#[tokio::test]
async fn create_without_id_in_response_is_malformed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/companies"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(serde_json::json!({"company": "Acme"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let err = client(&server).create(&draft()).await.expect_err("must fail");
    assert!(matches!(
        err,
        rolecall_client::ClientError::MalformedResponse { .. }
    ));
}

#[tokio::test]
async fn create_validation_rejection_surfaces_as_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/companies"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": "Missing or empty 'location'"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let err = client(&server).create(&draft()).await.expect_err("must fail");
    match err {
        rolecall_client::ClientError::Api { status, .. } => assert_eq!(status, 400),
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn update_puts_to_record_path() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/companies/r-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "r-123",
            "company": "Acme Labs",
            "location": "Remote"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let id = RecordId::new("r-123");
    let mut update = draft();
    update.company = "Acme Labs".into();
    update.location = "Remote".into();

    let record = client(&server).update(&id, &update).await.expect("update");
    assert_eq!(record.company, "Acme Labs");
    assert_eq!(record.location, "Remote");
}

#[tokio::test]
async fn update_with_id_free_response_keeps_known_id() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/companies/r-7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let id = RecordId::new("r-7");
    let record = client(&server).update(&id, &draft()).await.expect("update");
    assert_eq!(record.id.as_str(), "r-7");
}

#[tokio::test]
async fn delete_treats_any_2xx_as_ack() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/companies/r-123"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"deleted": "r-123"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    client(&server)
        .delete(&RecordId::new("r-123"))
        .await
        .expect("delete");
}

#[tokio::test]
async fn delete_non_2xx_maps_to_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/companies/r-404"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such record"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client(&server)
        .delete(&RecordId::new("r-404"))
        .await
        .expect_err("must fail");
    assert!(!err.is_unreachable());
}

// ── Health ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn health_reports_ok() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    assert!(client(&server).health().await.expect("health"));
}

#[tokio::test]
async fn health_transport_failure_is_unreachable() {
    let config = ClientConfig::new("http://127.0.0.1:1")
        .expect("valid base url")
        .with_timeout_secs(1);
    let client = DirectoryClient::new(config).expect("client build");

    let err = client.health().await.expect_err("must fail");
    assert!(err.is_unreachable());
}
