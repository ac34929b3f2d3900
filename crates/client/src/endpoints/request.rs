//! Shared request execution and error translation.
//!
//! Responsibilities:
//! - Send a prepared request.
//! - Map transport failures through `ClientError::from(reqwest::Error)`.
//! - Map non-2xx responses to `ClientError::ApiError` with the server `detail`.
//!
//! Does NOT handle:
//! - Retries. A failed call is terminal for the current attempt.

use reqwest::{RequestBuilder, Response};
use tracing::debug;

use crate::error::{ClientError, GENERIC_SERVER_ERROR, Result};
use crate::models::ErrorDetail;

/// Sends an HTTP request and returns the response if its status is 2xx.
///
/// # Errors
///
/// - `ClientError::NoResponse` when the request went out but nothing came back.
/// - `ClientError::ApiError` for non-2xx statuses; `message` is the `detail`
///   field of the JSON body, or "Server error" when absent.
/// - `ClientError::Request` for anything else.
pub async fn send_request(builder: RequestBuilder) -> Result<Response> {
    let response = builder.send().await.map_err(ClientError::from)?;

    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let url = response.url().to_string();
    let body = response.text().await.unwrap_or_default();

    let message = serde_json::from_str::<ErrorDetail>(&body)
        .ok()
        .and_then(|d| d.message())
        .unwrap_or_else(|| GENERIC_SERVER_ERROR.to_string());

    debug!(status, url = %url, "Backend returned error status");

    Err(ClientError::ApiError {
        status,
        url,
        message,
    })
}
