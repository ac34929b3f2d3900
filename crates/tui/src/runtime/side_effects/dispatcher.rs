//! Side effect dispatcher.
//!
//! This module contains the main `handle_side_effects` function that routes
//! actions to their handler functions in submodules.

use crate::action::Action;
use crate::runtime::side_effects::{
    SharedClient, TaskTracker, download, generate, health, preferences,
};
use docgen_config::ConfigManager;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::{Mutex, mpsc::Sender};
use tracing::{Instrument, info_span};

/// Handle side effects (async backend calls and file writes) for actions.
///
/// Actions without a side effect return immediately.
///
/// # Arguments
///
/// * `action` - The action to handle
/// * `client` - The shared backend client
/// * `tx` - The action channel sender for sending results
/// * `config_manager` - The preferences store
/// * `task_tracker` - Tracker the spawned tasks are registered with
/// * `output_dir` - Directory downloads are written to
pub async fn handle_side_effects(
    action: Action,
    client: SharedClient,
    tx: Sender<Action>,
    config_manager: Arc<Mutex<ConfigManager>>,
    task_tracker: TaskTracker,
    output_dir: PathBuf,
) {
    let action_name = action_type_name(&action);
    let start = Instant::now();

    let span = info_span!(
        "tui.handle_action",
        action_type = action_name,
        duration_ms = tracing::field::Empty,
    );

    async move {
        handle_action(action, client, tx, config_manager, task_tracker, output_dir).await;

        let duration = start.elapsed().as_millis() as i64;
        tracing::Span::current().record("duration_ms", duration);
    }
    .instrument(span)
    .await;
}

/// Get a safe action name for tracing (no payloads).
fn action_type_name(action: &Action) -> &'static str {
    match action {
        Action::CheckHealth => "CheckHealth",
        Action::GenerateDocumentation { .. } => "GenerateDocumentation",
        Action::DownloadDocumentation { .. } => "DownloadDocumentation",
        Action::SavePreferences(_) => "SavePreferences",
        Action::SelectTier(_) => "SelectTier",
        Action::ResetSession => "ResetSession",
        Action::ToggleDarkMode => "ToggleDarkMode",
        Action::Input(_) => "Input",
        Action::Mouse(_) => "Mouse",
        Action::Resize(_, _) => "Resize",
        Action::Tick => "Tick",
        Action::Quit => "Quit",
        _ => "Other",
    }
}

async fn handle_action(
    action: Action,
    client: SharedClient,
    tx: Sender<Action>,
    config_manager: Arc<Mutex<ConfigManager>>,
    task_tracker: TaskTracker,
    output_dir: PathBuf,
) {
    match action {
        Action::CheckHealth => {
            health::handle_check_health(client, tx, task_tracker.clone()).await;
        }
        Action::GenerateDocumentation { repo_url } => {
            generate::handle_generate_documentation(client, tx, task_tracker.clone(), repo_url)
                .await;
        }
        Action::DownloadDocumentation {
            repo_name,
            tier,
            content,
        } => {
            download::handle_download_documentation(output_dir, repo_name, tier, content, tx)
                .await;
        }
        Action::SavePreferences(state) => {
            preferences::handle_save_preferences(config_manager, state, tx, task_tracker.clone())
                .await;
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docgen_client::Tier;

    #[test]
    fn test_action_type_name_hides_payloads() {
        let action = Action::GenerateDocumentation {
            repo_url: "https://github.com/acme/secret".to_string(),
        };
        assert_eq!(action_type_name(&action), "GenerateDocumentation");
        assert_eq!(action_type_name(&Action::SelectTier(Tier::Advanced)), "SelectTier");
        assert_eq!(action_type_name(&Action::PreferencesSaved(Ok(()))), "Other");
    }
}
