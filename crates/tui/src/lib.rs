//! Docgen TUI Library
//!
//! This library provides the application state, input handling, rendering
//! and async runtime for the repository documentation generator terminal UI.
//!
//! # Example
//!
//! ```rust
//! use docgen_tui::{Action, App};
//! use crossterm::event::{KeyCode, KeyEvent};
//!
//! let mut app = App::new(None);
//! if let Some(action) = app.handle_input(KeyEvent::from(KeyCode::Esc)) {
//!     assert!(matches!(action, Action::Quit));
//! }
//! ```

pub mod action;
pub mod app;
pub mod cli;
pub mod runtime;
pub mod ui;

// Re-export commonly used types at the crate root
pub use action::Action;
pub use app::{App, BackendHealth, FOOTER_HEIGHT, HEADER_HEIGHT};
pub use ui::toast::{Toast, ToastLevel};
