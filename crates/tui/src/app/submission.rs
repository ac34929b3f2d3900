//! Submission lifecycle for documentation generation.
//!
//! Responsibilities:
//! - Track whether a generation request is idle, in flight, succeeded, or failed.
//! - Hold the latest `GenerationResult` or error message.
//!
//! Does NOT handle:
//! - Issuing the request (see `runtime::side_effects::generate`).
//!
//! Invariants:
//! - A result and an in-flight request never coexist.
//! - A result and an error never coexist.
//! - Starting a new submission discards the previous result and error.

use docgen_client::GenerationResult;

/// Current state of the documentation request.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Loading {
        repo_url: String,
    },
    Success(GenerationResult),
    Failed(String),
}

impl SubmissionState {
    /// Start a submission. Returns false, leaving state untouched, if one is
    /// already in flight.
    pub fn begin(&mut self, repo_url: impl Into<String>) -> bool {
        if self.is_loading() {
            tracing::warn!("Ignoring submission while another is in flight");
            return false;
        }
        *self = Self::Loading {
            repo_url: repo_url.into(),
        };
        true
    }

    /// Store a successful result. Only valid while loading.
    pub fn resolve(&mut self, result: GenerationResult) -> bool {
        if !self.is_loading() {
            tracing::warn!(repo_name = %result.repo_name, "Dropping result with no submission in flight");
            return false;
        }
        *self = Self::Success(result);
        true
    }

    /// Record a failure message. Only valid while loading.
    pub fn reject(&mut self, message: impl Into<String>) -> bool {
        if !self.is_loading() {
            tracing::warn!("Dropping error with no submission in flight");
            return false;
        }
        *self = Self::Failed(message.into());
        true
    }

    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    /// URL of the in-flight submission, if any.
    pub fn pending_url(&self) -> Option<&str> {
        match self {
            Self::Loading { repo_url } => Some(repo_url),
            _ => None,
        }
    }

    pub fn result(&self) -> Option<&GenerationResult> {
        match self {
            Self::Success(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}
