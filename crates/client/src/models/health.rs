//! Health and error body models.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `GET /api/v1/health`. Every field is optional; any 2xx is healthy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub service: Option<String>,
}

/// Error body the backend sends with non-2xx responses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorDetail {
    /// The user-facing message: strings verbatim, other JSON rendered as text.
    ///
    /// Returns `None` for a missing, null, or empty detail.
    pub fn message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            Value::Null => None,
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}
