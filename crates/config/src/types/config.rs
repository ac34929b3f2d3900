//! Backend connection configuration.
//!
//! Responsibilities:
//! - Define the resolved API settings handed to the client builder.
//! - Serialize durations as whole seconds.
//!
//! Does NOT handle:
//! - Resolving values from env or CLI (see `loader` module).
//!
//! Invariants:
//! - `base_url` is validated and carries no trailing slash once built by `ConfigLoader`.
//! - `timeout` is `None` unless explicitly configured; requests are then unbounded.

use crate::constants::DEFAULT_API_BASE_URL;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Module for serializing an optional Duration as seconds (integer).
mod optional_duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.map(|d| d.as_secs()).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = Option::<u64>::deserialize(deserializer)?;
        Ok(secs.map(Duration::from_secs))
    }
}

/// Settings for the documentation backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the backend (e.g., http://localhost:8000)
    pub base_url: String,
    /// Optional request timeout (serialized as seconds)
    #[serde(default, with = "optional_duration_seconds")]
    pub timeout: Option<Duration>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

/// Fully resolved application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
}

impl Config {
    /// Create a config pointing at the given backend URL with no timeout.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                base_url: base_url.into(),
                timeout: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_localhost() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert!(config.api.timeout.is_none());
    }

    #[test]
    fn test_timeout_serializes_as_seconds() {
        let config = Config {
            api: ApiConfig {
                base_url: "http://backend:9000".to_string(),
                timeout: Some(Duration::from_secs(90)),
            },
        };
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["api"]["timeout"], 90);

        let back: Config = serde_json::from_value(json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_missing_timeout_deserializes_as_none() {
        let config: Config =
            serde_json::from_str(r#"{"api":{"base_url":"http://localhost:8000"}}"#).unwrap();
        assert!(config.api.timeout.is_none());
    }
}
