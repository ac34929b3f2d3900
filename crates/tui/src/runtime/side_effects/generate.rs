//! Documentation generation side effect handler.
//!
//! Responsibilities:
//! - Submit a repository URL to the backend and report the result.
//!
//! Does NOT handle:
//! - URL validation (done by the form before the action is emitted).
//! - Discarding results that arrive after a reset (see `app::submission`).

use crate::action::Action;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc::Sender;

use super::{SharedClient, TaskTracker};

/// Handle a documentation generation request.
pub async fn handle_generate_documentation(
    client: SharedClient,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
    repo_url: String,
) {
    task_tracker.spawn(async move {
        let start = Instant::now();
        let result = client.generate_documentation(&repo_url).await;
        match &result {
            Ok(doc) => tracing::info!(
                repo_name = %doc.repo_name,
                elapsed_ms = start.elapsed().as_millis() as u64,
                "Documentation generated"
            ),
            Err(e) => tracing::warn!(
                status = ?e.status(),
                elapsed_ms = start.elapsed().as_millis() as u64,
                "Documentation generation failed"
            ),
        }
        let _ = tx
            .send(Action::DocumentationLoaded(Box::new(
                result.map_err(Arc::new),
            )))
            .await;
    });
}
