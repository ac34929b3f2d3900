//! Backend health check side effect handler.
//!
//! Responsibilities:
//! - Probe the backend and report the outcome.
//!
//! Does NOT handle:
//! - Deciding when to show the unreachable banner (see `app::state`).

use crate::action::Action;
use std::sync::Arc;
use tokio::sync::mpsc::Sender;

use super::{SharedClient, TaskTracker};

/// Handle a backend health probe.
pub async fn handle_check_health(
    client: SharedClient,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
) {
    task_tracker.spawn(async move {
        let result = client.check_health().await.map_err(Arc::new);
        let _ = tx.send(Action::HealthChecked(result)).await;
    });
}
