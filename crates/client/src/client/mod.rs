//! Main docgen API client.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `health`: Backend health probe
//! - `generate`: Documentation generation
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//!
//! # Invariants
//! - `base_url` never ends with a slash.
//! - No call is retried.

pub mod builder;

mod generate;
mod health;

/// Documentation backend client.
///
/// Cheap to clone; clones share the underlying connection pool.
///
/// ```rust,ignore
/// use docgen_client::DocgenClient;
///
/// let client = DocgenClient::builder()
///     .base_url("http://localhost:8000".to_string())
///     .build()?;
/// client.check_health().await?;
/// ```
#[derive(Debug, Clone)]
pub struct DocgenClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
}

impl DocgenClient {
    /// Create a new client builder.
    pub fn builder() -> builder::DocgenClientBuilder {
        builder::DocgenClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
