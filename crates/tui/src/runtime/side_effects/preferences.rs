//! Preference persistence side effect handler.
//!
//! Responsibilities:
//! - Save the dark-mode preference whenever it changes.
//!
//! Does NOT handle:
//! - Loading preferences (done once at startup in `runtime::config`).
//!
//! Invariants:
//! - Saves complete in dispatch order, so the file always holds the most
//!   recently dispatched state.

use crate::action::Action;
use docgen_config::{ConfigManager, PersistedState};
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc::Sender};

use super::TaskTracker;

/// Handle saving preferences to the configured store.
///
/// The write happens before this returns. Only the result notification is
/// spawned, since the main loop owns the receiving end of `tx`.
pub async fn handle_save_preferences(
    config_manager: Arc<Mutex<ConfigManager>>,
    state: PersistedState,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
) {
    let result = {
        let mut cm = config_manager.lock().await;
        cm.save(&state).map_err(|e| {
            tracing::warn!(error = %e, "Failed to save preferences");
            format!("{e:#}")
        })
    };

    task_tracker.spawn(async move {
        let _ = tx.send(Action::PreferencesSaved(result)).await;
    });
}
