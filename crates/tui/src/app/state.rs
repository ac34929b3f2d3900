//! Application state types and layout constants.
//!
//! Responsibilities:
//! - Define the backend health tri-state (`BackendHealth`).
//! - Define which body is on screen (`BodyView`).
//!
//! Does NOT handle:
//! - State mutations (in the `App` impl).

/// Result of the most recent backend health check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BackendHealth {
    /// No check has completed yet (startup, or right after a reset).
    #[default]
    Unknown,
    Healthy,
    /// The last check failed; the banner is shown.
    Unreachable,
}

impl BackendHealth {
    /// Whether the "Backend Not Reachable" banner should be shown.
    pub fn shows_banner(self) -> bool {
        matches!(self, Self::Unreachable)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Unknown => "Checking backend",
            Self::Healthy => "Backend online",
            Self::Unreachable => "Backend offline",
        }
    }
}

/// The body currently shown between the banners and the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyView {
    /// Repository form (idle or after a failed submission).
    Form,
    Loading,
    /// Documentation viewer for a successful result.
    Viewer,
}

/// Layout constants for UI components.
pub const HEADER_HEIGHT: u16 = 3;
pub const FOOTER_HEIGHT: u16 = 3;
