//! Documentation generation endpoint tests.
//!
//! # Invariants
//! - The repo URL is posted unmodified as `{"repo_url": ...}`.
//! - A success body is returned without transformation.
//! - Server `detail` messages surface verbatim; otherwise "Server error".

mod common;

use common::*;
use docgen_client::Tier;
use std::time::Duration;
use wiremock::matchers::{body_json, method, path};

const EXPRESS_URL: &str = "https://github.com/expressjs/express";

#[tokio::test]
async fn test_generate_returns_documentation_unchanged() {
    let mock_server = MockServer::start().await;
    let fixture = load_fixture("generate/minimal.json");

    Mock::given(method("POST"))
        .and(path("/api/v1/generate"))
        .and(body_json(serde_json::json!({ "repo_url": EXPRESS_URL })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server)
        .generate_documentation(EXPRESS_URL)
        .await
        .unwrap();

    assert_eq!(result.repo_name, "express");
    assert_eq!(result.documentation.get(Tier::Beginner), "# Hi");
    assert_eq!(result.documentation.get(Tier::Intermediate), "# Mid");
    assert_eq!(result.documentation.get(Tier::Advanced), "# Adv");
}

#[tokio::test]
async fn test_generate_carries_metadata() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/generate"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("generate/express.json")),
        )
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let result = endpoints::post_generate(&client, &mock_server.uri(), EXPRESS_URL)
        .await
        .unwrap();

    assert_eq!(result.success, Some(true));
    let metadata = result.metadata.unwrap();
    assert_eq!(metadata["rate_limit_remaining"], 4987);
    assert!(result.documentation.beginner.contains("```javascript"));
}

#[tokio::test]
async fn test_url_is_sent_unmodified() {
    let mock_server = MockServer::start().await;
    let odd_url = "https://github.com/Some_Owner/repo-name/";

    Mock::given(method("POST"))
        .and(path("/api/v1/generate"))
        .and(body_json(serde_json::json!({ "repo_url": odd_url })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("generate/minimal.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    assert!(
        client_for(&mock_server)
            .generate_documentation(odd_url)
            .await
            .is_ok()
    );
}

#[tokio::test]
async fn test_detail_message_surfaces_verbatim() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/generate"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(serde_json::json!({"detail": "Invalid GitHub URL"})),
        )
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .generate_documentation(EXPRESS_URL)
        .await
        .unwrap_err();

    match &err {
        ClientError::ApiError {
            status, message, ..
        } => {
            assert_eq!(*status, 400);
            assert_eq!(message, "Invalid GitHub URL");
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
    assert_eq!(err.to_string(), "Invalid GitHub URL");
}

#[tokio::test]
async fn test_missing_detail_is_generic_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/generate"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .generate_documentation(EXPRESS_URL)
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert_eq!(err.to_string(), "Server error");
}

#[tokio::test]
async fn test_structured_detail_rendered_as_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/generate"))
        .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
            "detail": [{"loc": ["body", "repo_url"], "msg": "field required"}]
        })))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .generate_documentation(EXPRESS_URL)
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(422));
    assert!(err.to_string().contains("field required"));
}

#[tokio::test]
async fn test_connection_refused_is_no_response() {
    let client = DocgenClient::builder()
        .base_url(closed_port_url())
        .build()
        .unwrap();

    let err = client.generate_documentation(EXPRESS_URL).await.unwrap_err();
    assert!(err.is_no_response());
    assert_eq!(
        err.to_string(),
        "No response from server. Is the backend running?"
    );
}

#[tokio::test]
async fn test_configured_timeout_is_no_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/generate"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(load_fixture("generate/minimal.json"))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let client = DocgenClient::builder()
        .base_url(mock_server.uri())
        .timeout(Duration::from_millis(100))
        .build()
        .unwrap();

    let err = client.generate_documentation(EXPRESS_URL).await.unwrap_err();
    assert!(err.is_no_response());
}

#[tokio::test]
async fn test_malformed_success_body_is_invalid_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"repo_name": "x"})))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .generate_documentation(EXPRESS_URL)
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_no_retry_on_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/generate"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let _ = client_for(&mock_server)
        .generate_documentation(EXPRESS_URL)
        .await;
}

#[tokio::test]
async fn test_unparsable_base_url_reports_cause() {
    let client = DocgenClient::builder()
        .base_url("not a url".to_string())
        .build()
        .unwrap();

    let err = client.generate_documentation(EXPRESS_URL).await.unwrap_err();

    let ClientError::Request(message) = &err else {
        panic!("expected a request error, got {err:?}");
    };
    assert!(message.starts_with("builder error: "), "{message}");
    assert!(message.len() > "builder error: ".len(), "{message}");
    assert_eq!(err.to_string(), *message);
}
