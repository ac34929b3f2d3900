//! Documentation download side effect handler.
//!
//! Responsibilities:
//! - Write one tier's raw markdown to `<repo>-<tier>-docs.md`.
//!
//! Does NOT handle:
//! - Choosing which tier to download (the viewer emits the action).
//!
//! Invariants:
//! - The content is written byte-for-byte as received from the backend.
//! - Path separators in the repository name never escape the output directory.

use crate::action::Action;
use docgen_client::Tier;
use std::path::{Path, PathBuf};
use tokio::sync::mpsc::Sender;

/// File name for a downloaded tier, e.g. `express-beginner-docs.md`.
pub fn download_file_name(repo_name: &str, tier: Tier) -> String {
    let safe: String = repo_name
        .trim()
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    let safe = if safe.is_empty() || safe.chars().all(|c| c == '.') {
        "repository".to_string()
    } else {
        safe
    };
    format!("{safe}-{}-docs.md", tier.as_str())
}

async fn write_document(output_dir: &Path, file_name: &str, content: &str) -> std::io::Result<PathBuf> {
    tokio::fs::create_dir_all(output_dir).await?;
    let path = output_dir.join(file_name);
    tokio::fs::write(&path, content).await?;
    Ok(path)
}

/// Handle writing a tier's documentation to disk.
pub async fn handle_download_documentation(
    output_dir: PathBuf,
    repo_name: String,
    tier: Tier,
    content: String,
    tx: Sender<Action>,
) {
    let file_name = download_file_name(&repo_name, tier);
    let result = match write_document(&output_dir, &file_name, &content).await {
        Ok(path) => {
            tracing::info!(path = %path.display(), bytes = content.len(), "Documentation saved");
            Ok(path)
        }
        Err(e) => {
            tracing::error!(error = %e, file = %file_name, "Failed to save documentation");
            Err(e.to_string())
        }
    };
    let _ = tx.send(Action::DocumentationDownloaded(result)).await;
}
