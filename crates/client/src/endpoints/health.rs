//! Backend health endpoint.

use reqwest::Client;

use crate::endpoints::send_request;
use crate::error::Result;
use crate::models::HealthStatus;
use docgen_config::constants::HEALTH_ENDPOINT_PATH;

/// Probe the backend health endpoint.
///
/// Any 2xx counts as healthy. The body is parsed leniently: a missing or
/// non-JSON body yields an empty [`HealthStatus`].
pub async fn get_health(client: &Client, base_url: &str) -> Result<HealthStatus> {
    let url = format!("{}{}", base_url, HEALTH_ENDPOINT_PATH);

    let response = send_request(client.get(&url)).await?;
    let body = response.text().await.unwrap_or_default();

    Ok(serde_json::from_str(&body).unwrap_or_default())
}
