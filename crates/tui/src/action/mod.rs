//! Action protocol for async TUI event handling.
//!
//! Actions represent both user inputs and async API operation results. They
//! travel over one bounded `tokio::sync::mpsc` channel.
//!
//! # Module Structure
//!
//! - `redaction`: Logging wrapper (`RedactedAction`)
//! - `variants`: Action enum definition (`Action`)
//!
//! When logging Actions, use `RedactedAction(&action)` instead of `?action`
//! so documentation bodies and error payloads stay out of log files.
//!
//! # What This Module Does NOT Handle
//!
//! - Action handling logic (handled by `App::update`)
//! - Async task execution (handled by the runtime module)

pub mod redaction;
pub mod variants;

pub use redaction::RedactedAction;
pub use variants::Action;
