//! Test helpers for TUI testing.
//!
//! Provides utility functions for simulating keyboard input and creating
//! test fixtures for the TUI application.

#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use docgen_client::{GenerationResult, TieredDocumentation};
use docgen_tui::{Action, App};
use std::sync::Arc;

/// Create a character key event.
pub fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

/// Create an Enter key event.
pub fn enter_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)
}

/// Create a Ctrl+char key event.
pub fn ctrl_key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// Type `text` into the app one key at a time.
pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        let action = app.handle_input(key(c));
        assert!(action.is_none(), "typing {c:?} produced {action:?}");
    }
}

/// A small generation result with distinct content per tier.
pub fn sample_result(repo_name: &str) -> GenerationResult {
    GenerationResult {
        success: Some(true),
        repo_name: repo_name.to_string(),
        documentation: TieredDocumentation {
            beginner: "# Getting Started\n\nInstall with `npm install`.".to_string(),
            intermediate: "# Architecture\n\n- Router\n- Middleware".to_string(),
            advanced: "# Internals\n\n```rust\nfn main() {}\n```".to_string(),
        },
        metadata: None,
    }
}

/// Drive `app` through a successful submission for `repo_url`.
pub fn load_documentation(app: &mut App, repo_url: &str, result: GenerationResult) {
    app.update(Action::GenerateDocumentation {
        repo_url: repo_url.to_string(),
    });
    app.update(Action::DocumentationLoaded(Box::new(Ok(result))));
}

/// Wrap an error for a `DocumentationLoaded` action.
pub fn failed(err: docgen_client::ClientError) -> Action {
    Action::DocumentationLoaded(Box::new(Err(Arc::new(err))))
}
