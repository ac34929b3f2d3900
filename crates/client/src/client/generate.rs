//! Documentation generation.

use tracing::{info, warn};

use crate::client::DocgenClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::GenerationResult;

impl DocgenClient {
    /// Generate tiered documentation for a repository URL.
    ///
    /// There is no timeout unless one was configured on the builder.
    pub async fn generate_documentation(&self, repo_url: &str) -> Result<GenerationResult> {
        info!(repo_url, "Requesting documentation generation");

        let result = endpoints::post_generate(&self.http, &self.base_url, repo_url).await;
        match &result {
            Ok(doc) => info!(repo_name = %doc.repo_name, "Documentation generated"),
            Err(e) => warn!(status = ?e.status(), error = %e, "Documentation generation failed"),
        }
        result
    }
}
