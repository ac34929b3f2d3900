//! Async side effect handlers for TUI actions.
//!
//! Responsibilities:
//! - Run backend calls, file writes and preference saves off the UI loop.
//! - Send results back via the action channel for state updates.
//!
//! Does NOT handle:
//! - Direct application state modification (sends actions to do that).
//! - UI rendering or terminal management.
//!
//! Invariants:
//! - Backend calls are spawned on the shared `TaskTracker` so shutdown can
//!   wait for them.
//! - Every triggering action produces exactly one result action.
//! - The client is shared without a lock; all its methods take `&self`.

mod types;

mod dispatcher;

mod download;
mod generate;
mod health;
mod preferences;

pub use dispatcher::handle_side_effects;
pub use download::download_file_name;
pub use tokio_util::task::TaskTracker;
pub use types::SharedClient;
