//! Preference persistence.
//!
//! Responsibilities:
//! - Determine the preferences file location.
//! - Read and write user preferences (`PersistedState`) to disk.
//! - Back up corrupt preference files before overwriting.
//!
//! Does NOT handle:
//! - Loading environment variables (see `loader` module).
//! - Direct REST API communication (see `crates/client`).
//!
//! Invariants:
//! - The file is a flat JSON object of string values, keyed like browser storage.
//! - Keys this crate does not know about are preserved across saves.
//! - Writes are atomic (temp file + rename).
//! - Corrupt files are backed up before being overwritten.

use std::path::{Path, PathBuf};

mod manager;
mod path;
mod state;

pub use manager::ConfigManager;
pub use path::default_config_path;
pub use state::{ConfigFileError, PersistedState};

pub(crate) use state::read_config_file;

/// Creates a backup of a corrupt config file before it is overwritten.
///
/// The backup is created by renaming the original file to a path with a
/// `.corrupt.{timestamp}` extension. This preserves the original file contents
/// for potential recovery while preventing the corrupt file from blocking
/// application startup.
pub(crate) fn create_corrupt_backup(path: &Path) -> Result<PathBuf, std::io::Error> {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    // with_extension replaces the last extension: config.json -> config.corrupt.<ts>
    let backup_path = path.with_extension(format!("corrupt.{}", timestamp));

    std::fs::rename(path, &backup_path)?;

    Ok(backup_path)
}
