//! Repository URL form state and validation.
//!
//! Responsibilities:
//! - Validate GitHub repository URLs before anything reaches the network.
//! - Hold the URL input, validation message, and example selection.
//!
//! Does NOT handle:
//! - Key routing (see `app::input::form`).
//! - Rendering (see `ui::screens::repo_input`).
//!
//! Invariants:
//! - Submission emits the raw input string; it is never trimmed or normalized.
//! - An invalid submission emits no action.

use thiserror::Error;

use crate::action::Action;
use crate::app::input::components::SingleLineInput;

/// Example repositories offered below the input.
pub const EXAMPLE_REPO_URLS: [&str; 3] = [
    "https://github.com/expressjs/express",
    "https://github.com/axios/axios",
    "https://github.com/microsoft/vscode",
];

pub const REPO_URL_PLACEHOLDER: &str = "https://github.com/username/repository";

const GITHUB_PREFIX: &str = "https://github.com/";

/// Local validation failure; never sent to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a valid GitHub repository URL (e.g., https://github.com/username/repo)")]
    InvalidRepoUrl,
}

/// Check that `url` is `https://github.com/<owner>/<repo>` with an optional
/// trailing slash, where both segments are ASCII word characters or `-`.
///
/// ```
/// use docgen_tui::app::validate_repo_url;
///
/// assert!(validate_repo_url("https://github.com/expressjs/express").is_ok());
/// assert!(validate_repo_url("https://github.com/expressjs/express/").is_ok());
/// assert!(validate_repo_url("http://github.com/expressjs/express").is_err());
/// ```
pub fn validate_repo_url(url: &str) -> Result<(), ValidationError> {
    let rest = url
        .strip_prefix(GITHUB_PREFIX)
        .ok_or(ValidationError::InvalidRepoUrl)?;
    let rest = rest.strip_suffix('/').unwrap_or(rest);

    let mut segments = rest.split('/');
    match (segments.next(), segments.next(), segments.next()) {
        (Some(owner), Some(repo), None) if is_segment(owner) && is_segment(repo) => Ok(()),
        _ => Err(ValidationError::InvalidRepoUrl),
    }
}

fn is_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}

/// State of the repository URL form.
#[derive(Debug, Clone)]
pub struct RepoForm {
    pub input: SingleLineInput,
    pub validation_message: Option<String>,
    /// Index into [`EXAMPLE_REPO_URLS`] of the highlighted example.
    pub selected_example: usize,
}

impl Default for RepoForm {
    fn default() -> Self {
        Self::new()
    }
}

impl RepoForm {
    pub fn new() -> Self {
        Self {
            input: SingleLineInput::with_placeholder(REPO_URL_PLACEHOLDER),
            validation_message: None,
            selected_example: 0,
        }
    }

    pub fn value(&self) -> &str {
        self.input.value()
    }

    /// Validate the current input. Clears any previous message first.
    pub fn submit(&mut self) -> Option<Action> {
        self.validation_message = None;
        let repo_url = self.input.value().to_string();
        match validate_repo_url(&repo_url) {
            Ok(()) => Some(Action::GenerateDocumentation { repo_url }),
            Err(err) => {
                tracing::debug!("Rejected repository URL");
                self.validation_message = Some(err.to_string());
                None
            }
        }
    }

    /// Overwrite the input with example `index`; out-of-range indices are ignored.
    pub fn apply_example(&mut self, index: usize) {
        if let Some(url) = EXAMPLE_REPO_URLS.get(index) {
            self.selected_example = index;
            self.input.set_value(*url);
        }
    }

    pub fn apply_selected_example(&mut self) {
        self.apply_example(self.selected_example);
    }

    pub fn select_next_example(&mut self) {
        self.selected_example = (self.selected_example + 1) % EXAMPLE_REPO_URLS.len();
    }

    pub fn select_previous_example(&mut self) {
        self.selected_example =
            (self.selected_example + EXAMPLE_REPO_URLS.len() - 1) % EXAMPLE_REPO_URLS.len();
    }

    /// Returns true if a message was cleared.
    pub fn clear_validation(&mut self) -> bool {
        self.validation_message.take().is_some()
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
