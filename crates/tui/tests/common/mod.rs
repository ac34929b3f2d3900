//! Common test utilities for TUI side effects tests.
//!
//! This module provides shared helper functions and types for testing the TUI's
//! async side effect handlers. It uses wiremock to stand in for the
//! documentation backend.
//!
//! # Invariants
//! - All mock servers use random available ports to avoid conflicts
//! - Each test gets its own isolated mock server, action channel, preferences
//!   file and download directory
//!
//! # What this does NOT handle
//! - TUI rendering or terminal management

// Allow dead code since not all tests use all utilities
#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::sync::{Mutex, mpsc};

pub use docgen_client::DocgenClient;
pub use docgen_client::testing::load_fixture;
pub use docgen_config::ConfigManager;
pub use docgen_tui::action::Action;
pub use docgen_tui::runtime::side_effects::{SharedClient, TaskTracker, handle_side_effects};
pub use tokio::sync::mpsc::{Receiver, Sender};
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Test harness for side effects testing.
pub struct SideEffectsTestHarness {
    /// The mock HTTP server standing in for the backend
    pub mock_server: MockServer,
    /// Receiver for actions sent by the side effect handlers
    pub action_rx: Receiver<Action>,
    /// Sender for actions (clone this to pass to handlers)
    pub action_tx: Sender<Action>,
    /// Shared client pointing to the mock server
    pub client: SharedClient,
    /// Preferences store backed by a temp file
    pub config_manager: Arc<Mutex<ConfigManager>>,
    pub task_tracker: TaskTracker,
    /// Keeps the temp directory alive for the harness lifetime
    pub temp_dir: TempDir,
}

impl SideEffectsTestHarness {
    /// Create a new test harness with a mock server and fresh channels.
    pub async fn new() -> Self {
        let mock_server = MockServer::start().await;
        let (action_tx, action_rx) = mpsc::channel::<Action>(100);
        let client = create_test_client(&mock_server.uri());
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_manager = ConfigManager::new_with_path(temp_dir.path().join("config.json"))
            .expect("Failed to create config manager");

        Self {
            mock_server,
            action_rx,
            action_tx,
            client,
            config_manager: Arc::new(Mutex::new(config_manager)),
            task_tracker: TaskTracker::new(),
            temp_dir,
        }
    }

    /// Directory downloads are written to.
    pub fn output_dir(&self) -> PathBuf {
        self.temp_dir.path().join("downloads")
    }

    /// Path of the preferences file.
    pub fn config_path(&self) -> PathBuf {
        self.temp_dir.path().join("config.json")
    }

    /// Handle an action and collect all resulting actions.
    ///
    /// `handle_side_effects` runs under a short timeout to catch handlers
    /// that block on network I/O instead of spawning.
    pub async fn handle_and_collect(&mut self, action: Action, timeout_secs: u64) -> Vec<Action> {
        let handle_future = handle_side_effects(
            action,
            self.client.clone(),
            self.action_tx.clone(),
            self.config_manager.clone(),
            self.task_tracker.clone(),
            self.output_dir(),
        );
        match tokio::time::timeout(tokio::time::Duration::from_millis(500), handle_future).await {
            Ok(()) => {}
            Err(_) => {
                panic!(
                    "handle_side_effects timed out - it may be blocking on network I/O instead of spawning tasks"
                );
            }
        }

        tokio::task::yield_now().await;

        let mut actions = Vec::new();
        let deadline = tokio::time::Instant::now() + tokio::time::Duration::from_secs(timeout_secs);

        while tokio::time::Instant::now() < deadline {
            match tokio::time::timeout(
                tokio::time::Duration::from_millis(100),
                self.action_rx.recv(),
            )
            .await
            {
                Ok(Some(action)) => actions.push(action),
                Ok(None) => break,
                Err(_) => {
                    if !actions.is_empty() {
                        break;
                    }
                    tokio::task::yield_now().await;
                }
            }
        }

        actions
    }

    /// Expect a specific action within a timeout.
    pub async fn expect_action(&mut self, timeout_ms: u64) -> Action {
        tokio::time::timeout(
            tokio::time::Duration::from_millis(timeout_ms),
            self.action_rx.recv(),
        )
        .await
        .expect("Timeout waiting for action")
        .expect("Channel closed while waiting for action")
    }

    /// Drain all pending actions from the channel.
    pub async fn drain_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        while let Ok(Some(action)) = tokio::time::timeout(
            tokio::time::Duration::from_millis(10),
            self.action_rx.recv(),
        )
        .await
        {
            actions.push(action);
        }
        actions
    }
}

/// Create a test client pointing to the mock server.
pub fn create_test_client(mock_uri: &str) -> SharedClient {
    let client = DocgenClient::builder()
        .base_url(mock_uri.to_string())
        .timeout(std::time::Duration::from_secs(5))
        .build()
        .expect("Failed to build test client");

    Arc::new(client)
}
