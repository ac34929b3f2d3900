//! Client builder for constructing [`DocgenClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (base_url)
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (redirects, optional timeout)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`DocgenClient`] methods)
//! - URL syntax validation (done by `docgen_config::ConfigLoader`)
//!
//! # Invariants
//! - `base_url` is required and must be provided before calling `build()`
//! - The base URL is always normalized to have no trailing slashes
//! - No request timeout is applied unless one is set

use std::time::Duration;

use crate::client::DocgenClient;
use crate::error::{ClientError, Result};
use docgen_config::{Config, constants::DEFAULT_MAX_REDIRECTS};

/// Builder for creating a new [`DocgenClient`].
#[derive(Debug, Default)]
pub struct DocgenClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl DocgenClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the backend, e.g. `http://localhost:8000`.
    ///
    /// Trailing slashes will be automatically removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set a request timeout. Unset by default: calls wait indefinitely.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Create a client builder from configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.api.base_url.clone());
        self.timeout = config.api.timeout;
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::InvalidUrl` if `base_url` is missing or blank, and
    /// `ClientError::Request` if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<DocgenClient> {
        let base_url = self
            .base_url
            .map(|url| Self::normalize_base_url(&url))
            .filter(|url| !url.is_empty())
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;

        let mut http_builder = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

        if let Some(timeout) = self.timeout {
            http_builder = http_builder.timeout(timeout);
        }

        let http = http_builder
            .build()
            .map_err(|e| ClientError::Request(e.to_string()))?;

        Ok(DocgenClient { http, base_url })
    }

    /// Normalize a base URL by removing trailing slashes.
    fn normalize_base_url(url: &str) -> String {
        url.trim().trim_end_matches('/').to_string()
    }
}
