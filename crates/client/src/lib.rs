//! Documentation backend API client.
//!
//! This crate provides a type-safe client for the documentation generation
//! backend: a health probe and the tiered documentation generation call, with
//! transport and server failures translated into a closed [`ClientError`] set.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use client::DocgenClient;
pub use client::builder::DocgenClientBuilder;
pub use error::{ClientError, Result};
pub use models::{
    ErrorDetail, GenerateRequest, GenerationResult, HealthStatus, Tier, TieredDocumentation,
};
