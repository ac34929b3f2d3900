//! Configuration type definitions for the docgen TUI.
//!
//! Responsibilities:
//! - Define the resolved backend connection settings (`Config`, `ApiConfig`).
//! - Define colour themes (`ColorTheme` persisted via dark mode, `Theme` at runtime).
//!
//! Does NOT handle:
//! - Configuration loading from files or environment variables (see `loader` module).
//! - Preference persistence (see `persistence` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - `ColorTheme` is derived from the persisted dark mode flag; `Theme` is never persisted.

mod config;
mod theme;

pub use config::{ApiConfig, Config};
pub use theme::{ColorTheme, Theme};
