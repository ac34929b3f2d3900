//! Centralized constants for the docgen workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

// =============================================================================
// Backend API
// =============================================================================

/// Default base URL of the documentation backend.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Path of the backend health endpoint, relative to the base URL.
pub const HEALTH_ENDPOINT_PATH: &str = "/api/v1/health";

/// Path of the documentation generation endpoint, relative to the base URL.
pub const GENERATE_ENDPOINT_PATH: &str = "/api/v1/generate";

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

/// Maximum allowed request timeout in seconds (1 hour).
///
/// Generation calls are unbounded unless a timeout is configured; this only
/// caps what a user may configure.
pub const MAX_TIMEOUT_SECS: u64 = 3600;

// =============================================================================
// Environment Variables
// =============================================================================

/// Primary override for the backend base URL.
pub const ENV_API_URL: &str = "DOCGEN_API_URL";

/// Fallback override shared with the web frontend's `.env` files.
pub const ENV_API_URL_FALLBACK: &str = "VITE_API_URL";

/// Optional request timeout in whole seconds.
pub const ENV_TIMEOUT_SECS: &str = "DOCGEN_TIMEOUT_SECS";

/// Overrides the location of the preferences file.
pub const ENV_CONFIG_PATH: &str = "DOCGEN_CONFIG_PATH";

/// Set to `1` or `true` to skip `.env` loading.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";

// =============================================================================
// Persistence
// =============================================================================

/// Storage key of the dark mode preference.
pub const DARK_MODE_STORAGE_KEY: &str = "darkMode";

/// File name of the preferences file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Application name used for platform config directories.
pub const APP_DIR_NAME: &str = "docgen-tui";

// =============================================================================
// UI / Runtime
// =============================================================================

/// Default capacity of the action channel.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// UI tick interval in milliseconds (drives the spinner and toast expiry).
pub const DEFAULT_UI_TICK_MS: u64 = 100;

/// Lines scrolled per page in the documentation viewer.
pub const DEFAULT_PAGE_SCROLL_LINES: u16 = 10;
