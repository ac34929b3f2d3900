//! Configuration management for the docgen TUI.
//!
//! This crate provides the backend connection settings (resolved from the
//! environment, `.env` files, and CLI overrides), the persisted user
//! preferences, and the colour themes shared by the TUI.

pub mod constants;
mod loader;
pub mod persistence;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use persistence::{ConfigFileError, ConfigManager, PersistedState};
pub use types::{ApiConfig, ColorTheme, Config, Theme};
