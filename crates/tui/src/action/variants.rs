//! Action enum definition for the TUI event system.
//!
//! # Action Categories
//!
//! - **System**: Lifecycle, ticks, raw terminal input
//! - **Health**: Backend probe trigger and result
//! - **Submission**: Generation trigger and result
//! - **Viewer**: Tier selection, download, reset
//! - **Preferences**: Dark mode toggle and persistence

use crossterm::event::{KeyEvent, MouseEvent};
use docgen_client::{ClientError, GenerationResult, HealthStatus, Tier};
use docgen_config::PersistedState;
use std::path::PathBuf;
use std::sync::Arc;

/// Unified action type for the TUI event loop.
#[derive(Debug, Clone)]
pub enum Action {
    // System
    Quit,
    Tick,
    Resize(u16, u16),
    Input(KeyEvent),
    Mouse(MouseEvent),

    // Health
    CheckHealth,
    HealthChecked(Result<HealthStatus, Arc<ClientError>>),

    // Submission
    /// Submit a validated repository URL. Carried unmodified to the backend.
    GenerateDocumentation {
        repo_url: String,
    },
    DocumentationLoaded(Box<Result<GenerationResult, Arc<ClientError>>>),

    // Viewer
    SelectTier(Tier),
    /// Write one tier's raw markdown to `<repo_name>-<tier>-docs.md`.
    DownloadDocumentation {
        repo_name: String,
        tier: Tier,
        content: String,
    },
    DocumentationDownloaded(Result<PathBuf, String>),
    /// Return to the initial state, as if the app had just started.
    ResetSession,

    // Preferences
    ToggleDarkMode,
    SavePreferences(PersistedState),
    PreferencesSaved(Result<(), String>),
}
