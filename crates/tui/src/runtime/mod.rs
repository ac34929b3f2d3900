//! Runtime components for the TUI application.
//!
//! This module contains the runtime infrastructure for the TUI:
//! - Terminal management (TerminalGuard)
//! - Backend client creation
//! - Configuration loading and preference persistence
//! - Async side effect handlers for backend calls and file writes
//!
//! Does NOT handle:
//! - UI rendering or input handling (see `docgen_tui::app` and `docgen_tui::ui`).
//! - HTTP details of the backend API (see `docgen_client`).
//!
//! Invariants:
//! - All modules are initialized during application startup in `main()`.
//! - Side effects run in separate tokio tasks to avoid blocking the UI.

pub mod client;
pub mod config;
pub mod side_effects;
pub mod terminal;
