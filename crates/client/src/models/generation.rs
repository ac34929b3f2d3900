//! Generation request/response models.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Body of `POST /api/v1/generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub repo_url: String,
}

impl GenerateRequest {
    pub fn new(repo_url: impl Into<String>) -> Self {
        Self {
            repo_url: repo_url.into(),
        }
    }
}

/// One of the three documentation detail levels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Tier {
    /// All tiers in display order.
    pub const ALL: [Tier; 3] = [Tier::Beginner, Tier::Intermediate, Tier::Advanced];

    /// Lowercase identifier, as used in file names and JSON keys.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Beginner => "🌱",
            Self::Intermediate => "⚡",
            Self::Advanced => "🚀",
        }
    }

    /// Zero-based position in [`Tier::ALL`].
    pub fn index(self) -> usize {
        match self {
            Self::Beginner => 0,
            Self::Intermediate => 1,
            Self::Advanced => 2,
        }
    }

    /// Next tier, wrapping around.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous tier, wrapping around.
    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Markdown text for each tier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TieredDocumentation {
    pub beginner: String,
    pub intermediate: String,
    pub advanced: String,
}

impl TieredDocumentation {
    /// Raw markdown for a tier.
    pub fn get(&self, tier: Tier) -> &str {
        match tier {
            Tier::Beginner => &self.beginner,
            Tier::Intermediate => &self.intermediate,
            Tier::Advanced => &self.advanced,
        }
    }
}

/// Successful response of the generation endpoint.
///
/// Immutable once received; the TUI replaces it wholesale on a new submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    pub repo_name: String,
    pub documentation: TieredDocumentation,
    /// Analysis details and rate limit info; carried but not displayed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}
