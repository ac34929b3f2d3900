//! Data models for the documentation backend API.
//!
//! Responsibilities:
//! - Define request/response types for health and generation calls.
//! - Define the documentation `Tier` and its display metadata.
//!
//! Does NOT handle:
//! - HTTP transport (see `endpoints`).
//! - Markdown rendering (see the TUI crate).

mod generation;
mod health;

pub use generation::{GenerateRequest, GenerationResult, Tier, TieredDocumentation};
pub use health::{ErrorDetail, HealthStatus};
