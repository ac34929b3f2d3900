//! Configuration loader for environment variables and `.env` files.
//!
//! Responsibilities:
//! - Load backend settings from `.env` files, environment variables, and CLI overrides.
//! - Provide a builder-pattern `ConfigLoader` for layered configuration merging.
//! - Enforce `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - Persisting preferences back to disk (see `persistence` module).
//! - Building HTTP clients (see client crate).
//!
//! Invariants / Assumptions:
//! - Precedence is CLI override > environment > built-in default.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

mod builder;
mod env;
mod error;

pub use builder::ConfigLoader;
pub use env::env_var_or_none;
pub use error::ConfigError;
