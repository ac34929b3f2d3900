//! Shared types for side effect handlers.

use docgen_client::DocgenClient;
use std::sync::Arc;

/// Shared client handle for async tasks.
///
/// `DocgenClient` wraps a pooled `reqwest::Client`, so concurrent requests
/// need no mutex.
pub type SharedClient = Arc<DocgenClient>;
