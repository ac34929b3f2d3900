//! Redaction wrapper for Action logging.
//!
//! `RedactedAction` implements `Debug` so documentation bodies, repository
//! URLs and backend error payloads are summarised instead of written to logs.
//!
//! # Invariants
//!
//! - Variants carrying documentation text log only lengths.
//! - Error results log the HTTP status (if any), never the message.
//! - Simple variants fall through to default Debug.

use crate::action::variants::Action;

/// Redacted wrapper for Action that prevents payloads from being logged.
///
/// # Example
/// ```ignore
/// tracing::info!("Handling action: {:?}", RedactedAction(&action));
/// // Logs: Handling action: DocumentationLoaded(Ok(repo_name=<7 chars>, beginner=<4 chars>, ...))
/// ```
pub struct RedactedAction<'a>(pub &'a Action);

impl std::fmt::Debug for RedactedAction<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Action::Input(_) => write!(f, "Input(<key>)"),
            Action::Mouse(_) => write!(f, "Mouse(<event>)"),
            Action::GenerateDocumentation { repo_url } => {
                write!(f, "GenerateDocumentation(<{} chars>)", repo_url.len())
            }
            Action::DocumentationLoaded(result) => match result.as_ref() {
                Ok(doc) => write!(
                    f,
                    "DocumentationLoaded(Ok(repo_name=<{} chars>, beginner=<{} chars>, intermediate=<{} chars>, advanced=<{} chars>))",
                    doc.repo_name.len(),
                    doc.documentation.beginner.len(),
                    doc.documentation.intermediate.len(),
                    doc.documentation.advanced.len()
                ),
                Err(e) => write!(f, "DocumentationLoaded(Err(status={:?}))", e.status()),
            },
            Action::HealthChecked(result) => match result {
                Ok(_) => write!(f, "HealthChecked(Ok)"),
                Err(_) => write!(f, "HealthChecked(Err)"),
            },
            Action::DownloadDocumentation {
                repo_name,
                tier,
                content,
            } => write!(
                f,
                "DownloadDocumentation(<{} chars>, {}, <{} chars>)",
                repo_name.len(),
                tier,
                content.len()
            ),
            Action::DocumentationDownloaded(result) => match result {
                Ok(_) => write!(f, "DocumentationDownloaded(Ok)"),
                Err(_) => write!(f, "DocumentationDownloaded(Err)"),
            },
            Action::PreferencesSaved(result) => match result {
                Ok(()) => write!(f, "PreferencesSaved(Ok)"),
                Err(_) => write!(f, "PreferencesSaved(Err)"),
            },
            other => write!(f, "{:?}", other),
        }
    }
}
