//! Documentation generation endpoint.

use reqwest::Client;

use crate::endpoints::send_request;
use crate::error::{ClientError, Result};
use crate::models::{GenerateRequest, GenerationResult};
use docgen_config::constants::GENERATE_ENDPOINT_PATH;

/// Request tiered documentation for a repository.
///
/// `repo_url` is sent exactly as given.
pub async fn post_generate(
    client: &Client,
    base_url: &str,
    repo_url: &str,
) -> Result<GenerationResult> {
    let url = format!("{}{}", base_url, GENERATE_ENDPOINT_PATH);

    let builder = client.post(&url).json(&GenerateRequest::new(repo_url));
    let response = send_request(builder).await?;

    let bytes = response.bytes().await.map_err(ClientError::from)?;
    serde_json::from_slice(&bytes).map_err(|e| {
        ClientError::InvalidResponse(format!("Failed to parse generation result: {}", e))
    })
}
