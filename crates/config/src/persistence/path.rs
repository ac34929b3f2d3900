//! Path helpers for the preferences file location.
//!
//! Responsibilities:
//! - Determine the standard preferences file path.
//! - Use `directories` crate for platform-appropriate paths.
//!
//! Does NOT handle:
//! - File I/O operations.

use std::path::PathBuf;

use anyhow::Context;

use crate::constants::{APP_DIR_NAME, CONFIG_FILE_NAME};

/// Returns the default path to the preferences file.
///
/// - Linux/macOS: `~/.config/docgen-tui/config.json`
/// - Windows: `%AppData%\docgen-tui\config.json`
pub fn default_config_path() -> Result<PathBuf, anyhow::Error> {
    let proj_dirs = directories::ProjectDirs::from("", "", APP_DIR_NAME)
        .context("Failed to determine project directories")?;

    Ok(proj_dirs.config_dir().join(CONFIG_FILE_NAME))
}
