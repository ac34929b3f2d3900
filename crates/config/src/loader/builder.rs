//! Builder for resolving backend configuration.
//!
//! Responsibilities:
//! - Collect candidate values from `.env`, environment, and CLI overrides.
//! - Resolve precedence and validate the result into a `Config`.
//!
//! Does NOT handle:
//! - Reading preference files (see `persistence` module).
//!
//! Invariants / Assumptions:
//! - A CLI override always beats the environment.
//! - `DOTENV_DISABLED` is checked before `dotenvy::dotenv()` is called.
//! - The built base URL never ends with a slash.

use std::time::Duration;

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::{DEFAULT_API_BASE_URL, ENV_DOTENV_DISABLED, MAX_TIMEOUT_SECS};
use crate::types::{ApiConfig, Config};

/// Configuration loader that builds config from environment variables and overrides.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    cli_base_url: Option<String>,
    env_base_url: Option<String>,
    timeout: Option<Duration>,
}

impl ConfigLoader {
    /// Create a new loader with no values set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(ENV_DOTENV_DISABLED).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "Loaded .env file");
                Ok(self)
            }
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read overrides from the process environment.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Apply a base URL override from the command line.
    ///
    /// Blank values are ignored so an empty flag cannot mask the environment.
    pub fn with_api_base_url(mut self, url: Option<String>) -> Self {
        self.cli_base_url = url.filter(|u| !u.trim().is_empty());
        self
    }

    /// Set an explicit request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub(crate) fn set_env_base_url(&mut self, url: Option<String>) {
        self.env_base_url = url;
    }

    pub(crate) fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }

    /// The base URL that `build` would use before validation.
    pub fn effective_base_url(&self) -> &str {
        self.cli_base_url
            .as_deref()
            .or(self.env_base_url.as_deref())
            .unwrap_or(DEFAULT_API_BASE_URL)
    }

    /// Resolve precedence and validate into a `Config`.
    pub fn build(self) -> Result<Config, ConfigError> {
        let base_url = validate_and_normalize_base_url(self.effective_base_url())?;

        if let Some(timeout) = self.timeout {
            validate_timeout(timeout)?;
        }

        Ok(Config {
            api: ApiConfig {
                base_url,
                timeout: self.timeout,
            },
        })
    }
}

/// Validates a configured request timeout.
fn validate_timeout(timeout: Duration) -> Result<(), ConfigError> {
    let secs = timeout.as_secs();
    if secs == 0 {
        return Err(ConfigError::InvalidTimeout {
            message: "timeout must be greater than 0 seconds".to_string(),
        });
    }
    if secs > MAX_TIMEOUT_SECS {
        return Err(ConfigError::InvalidTimeout {
            message: format!("timeout must not exceed {MAX_TIMEOUT_SECS} seconds, got {secs}"),
        });
    }
    Ok(())
}

/// Validate that a base URL is an absolute http(s) URL with a host, and strip
/// any trailing slashes.
fn validate_and_normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(ConfigError::MissingBaseUrl);
    }

    let parsed = url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidValue {
        var: "api_base_url".into(),
        message: format!(
            "must be an absolute http(s) URL with a host (e.g. http://localhost:8000): {e}"
        ),
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ConfigError::InvalidValue {
            var: "api_base_url".into(),
            message: format!(
                "scheme must be http or https (e.g. http://localhost:8000), got: {scheme}"
            ),
        });
    }

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidValue {
            var: "api_base_url".into(),
            message: "host is required (e.g. http://localhost:8000)".into(),
        });
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_trailing_slash() {
        assert_eq!(
            validate_and_normalize_base_url("http://localhost:8000/").unwrap(),
            "http://localhost:8000"
        );
        assert_eq!(
            validate_and_normalize_base_url("  https://docs.example.com/api//  ").unwrap(),
            "https://docs.example.com/api"
        );
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let err = validate_and_normalize_base_url("ftp://localhost:8000").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        assert!(err.to_string().contains("scheme must be http or https"));
    }

    #[test]
    fn test_rejects_relative_url() {
        let err = validate_and_normalize_base_url("localhost:8000").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_blank_url_is_missing() {
        assert!(matches!(
            validate_and_normalize_base_url("   "),
            Err(ConfigError::MissingBaseUrl)
        ));
    }

    #[test]
    fn test_timeout_bounds() {
        assert!(validate_timeout(Duration::from_secs(1)).is_ok());
        assert!(validate_timeout(Duration::from_secs(MAX_TIMEOUT_SECS)).is_ok());
        assert!(matches!(
            validate_timeout(Duration::from_secs(0)),
            Err(ConfigError::InvalidTimeout { .. })
        ));
        assert!(matches!(
            validate_timeout(Duration::from_secs(MAX_TIMEOUT_SECS + 1)),
            Err(ConfigError::InvalidTimeout { .. })
        ));
    }

    #[test]
    fn test_cli_override_beats_env_value() {
        let mut loader = ConfigLoader::new();
        loader.set_env_base_url(Some("http://env-host:8000".to_string()));
        let loader = loader.with_api_base_url(Some("http://cli-host:9000/".to_string()));

        let config = loader.build().unwrap();
        assert_eq!(config.api.base_url, "http://cli-host:9000");
    }

    #[test]
    fn test_blank_cli_override_is_ignored() {
        let mut loader = ConfigLoader::new();
        loader.set_env_base_url(Some("http://env-host:8000".to_string()));
        let loader = loader.with_api_base_url(Some("  ".to_string()));

        assert_eq!(loader.effective_base_url(), "http://env-host:8000");
    }
}
