//! Health side effect handler tests.

mod common;

use common::*;
use wiremock::matchers::{method, path};

#[tokio::test]
async fn test_check_health_healthy() {
    let mut harness = SideEffectsTestHarness::new().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("health/healthy.json")))
        .expect(1)
        .mount(&harness.mock_server)
        .await;

    let actions = harness.handle_and_collect(Action::CheckHealth, 2).await;

    assert_eq!(actions.len(), 1);
    match &actions[0] {
        Action::HealthChecked(Ok(status)) => {
            assert_eq!(status.status.as_deref(), Some("healthy"));
        }
        other => panic!("expected HealthChecked(Ok), got {:?}", other),
    }
}

#[tokio::test]
async fn test_check_health_server_error_is_unreachable() {
    let mut harness = SideEffectsTestHarness::new().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/health"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&harness.mock_server)
        .await;

    let actions = harness.handle_and_collect(Action::CheckHealth, 2).await;

    assert!(
        matches!(&actions[..], [Action::HealthChecked(Err(e))] if e.is_backend_unreachable()),
        "unexpected actions: {:?}",
        actions
    );
}

#[tokio::test]
async fn test_check_health_connection_refused_is_unreachable() {
    let mut harness = SideEffectsTestHarness::new().await;
    // Nothing listens on port 9 locally.
    harness.client = create_test_client("http://127.0.0.1:9");

    let actions = harness.handle_and_collect(Action::CheckHealth, 5).await;

    assert!(
        matches!(&actions[..], [Action::HealthChecked(Err(e))] if e.is_backend_unreachable()),
        "unexpected actions: {:?}",
        actions
    );
}

#[tokio::test]
async fn test_non_effect_actions_send_nothing() {
    let mut harness = SideEffectsTestHarness::new().await;

    harness.handle_and_collect(Action::Tick, 0).await;
    harness.handle_and_collect(Action::ToggleDarkMode, 0).await;

    assert!(harness.drain_actions().await.is_empty());
}
