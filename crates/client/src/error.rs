//! Error types for the docgen client.
//!
//! Responsibilities:
//! - Define the closed set of failures the API client can report.
//! - Carry the exact user-facing message for each failure in `Display`.
//! - Classify `reqwest` errors into those variants.
//!
//! Invariants:
//! - A server-provided `detail` is surfaced verbatim as the `ApiError` message.
//! - Transport failures where the request went out but nothing came back are `NoResponse`.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Fallback message when an error response carries no usable `detail`.
pub const GENERIC_SERVER_ERROR: &str = "Server error";

/// Errors that can occur during docgen client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Health check failed for any reason.
    #[error("Backend is not reachable")]
    BackendUnreachable,

    /// The backend answered with a non-success status.
    ///
    /// `message` is the server `detail` when present, otherwise "Server error".
    #[error("{message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// The request was sent but no response arrived (refused, reset, timed out).
    #[error("No response from server. Is the backend running?")]
    NoResponse,

    /// Any other failure while building or sending the request.
    #[error("{0}")]
    Request(String),

    /// A success response whose body could not be decoded.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Invalid or missing base URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// Whether this error came from a failed health check.
    pub fn is_backend_unreachable(&self) -> bool {
        matches!(self, Self::BackendUnreachable)
    }

    /// Whether the backend never answered.
    pub fn is_no_response(&self) -> bool {
        matches!(self, Self::NoResponse)
    }

    /// HTTP status of a server error response, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            Self::Request(error_chain(&err))
        } else if err.is_decode() {
            Self::InvalidResponse(error_chain(&err))
        } else if err.is_connect() || err.is_timeout() || err.is_request() || err.is_body() {
            Self::NoResponse
        } else {
            Self::Request(error_chain(&err))
        }
    }
}

/// Render an error with its `source()` chain, e.g.
/// `builder error: relative URL without a base`.
///
/// Consecutive duplicate messages are collapsed.
fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut parts: Vec<String> = Vec::new();
    let mut current = Some(err);
    while let Some(e) = current {
        let message = e.to_string();
        if parts.last() != Some(&message) {
            parts.push(message);
        }
        current = e.source();
    }
    parts.join(": ")
}
