//! Backend client creation.
//!
//! Responsibilities:
//! - Build the documentation backend client from resolved configuration.
//!
//! Does NOT handle:
//! - Configuration loading (see `runtime::config`).
//! - Reachability checks (the first `CheckHealth` action does that).
//!
//! Invariants:
//! - Construction performs no network I/O, so an unreachable backend never
//!   prevents the UI from starting.

use anyhow::{Context, Result};
use docgen_client::DocgenClient;
use docgen_config::Config;

/// Create a new backend client from `config`.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be constructed.
pub fn create_client(config: &Config) -> Result<DocgenClient> {
    DocgenClient::builder()
        .from_config(config)
        .build()
        .context("failed to build documentation backend client")
}
