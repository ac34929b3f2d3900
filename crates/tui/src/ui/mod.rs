//! UI rendering modules.
//!
//! Responsibilities:
//! - Theme style helpers and the spinner.
//! - Toast notifications.
//! - Markdown and code highlighting.
//! - Per-body screens (repository form, documentation viewer) and shared widgets.
//!
//! Does NOT handle:
//! - Input handling or state mutation (see `app`).

pub mod components;
pub mod screens;
pub mod syntax;
pub mod theme;
pub mod toast;
pub mod widgets;

pub use toast::{Toast, ToastLevel};
