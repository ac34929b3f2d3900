//! Loading and saving of the preferences file.
//!
//! Responsibilities:
//! - Resolve the preferences file path (explicit, env override, or platform default).
//! - Load `PersistedState` once at startup, recovering from corrupt files.
//! - Atomic save operations.
//!
//! Does NOT handle:
//! - Path determination details (uses path module).
//! - Deciding when to save (the TUI saves on every preference change).
//!
//! Invariants:
//! - Writes are atomic (temp file + rename).
//! - A corrupt file never blocks startup; it is renamed aside and defaults are used.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde_json::{Map, Value};

use super::create_corrupt_backup;
use super::path::default_config_path;
use super::state::{ConfigFileError, PersistedState, read_config_file};
use crate::constants::ENV_CONFIG_PATH;
use crate::env_var_or_none;

/// Manages loading and saving user preferences to disk.
#[derive(Debug)]
pub struct ConfigManager {
    /// Path to the preferences file.
    config_path: PathBuf,
    /// Raw key/value contents of the file.
    store: Map<String, Value>,
}

impl ConfigManager {
    /// Creates a new `ConfigManager` using `DOCGEN_CONFIG_PATH` if set, otherwise
    /// the platform default path.
    pub fn new() -> Result<Self> {
        let config_path = match env_var_or_none(ENV_CONFIG_PATH) {
            Some(path) => PathBuf::from(path),
            None => default_config_path()?,
        };
        Self::new_with_path(config_path)
    }

    /// Creates a new `ConfigManager` with a specific preferences file path.
    ///
    /// If the file exists but cannot be read or parsed, it is backed up with a
    /// `.corrupt.{timestamp}` extension and defaults are used instead.
    pub fn new_with_path(config_path: PathBuf) -> Result<Self> {
        let store = if config_path.exists() {
            match read_config_file(&config_path) {
                Ok(store) => store,
                Err(e) => {
                    let is_not_found = matches!(
                        &e,
                        ConfigFileError::Read { source, .. } if source.kind() == std::io::ErrorKind::NotFound
                    );

                    if !is_not_found {
                        match create_corrupt_backup(&config_path) {
                            Ok(backup_path) => {
                                tracing::warn!(
                                    path = %config_path.display(),
                                    backup_path = %backup_path.display(),
                                    error = %e,
                                    "Config file is corrupt, backed up and using defaults"
                                );
                            }
                            Err(backup_err) => {
                                tracing::error!(
                                    path = %config_path.display(),
                                    error = %e,
                                    backup_error = %backup_err,
                                    "Config file is corrupt and backup failed, using defaults"
                                );
                            }
                        }
                    }
                    Map::new()
                }
            }
        } else {
            Map::new()
        };

        Ok(Self { config_path, store })
    }

    /// Returns the path to the preferences file.
    pub fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    /// Loads persisted preferences.
    ///
    /// Returns defaults if the file doesn't exist or could not be read.
    pub fn load(&self) -> PersistedState {
        PersistedState::from_store(&self.store)
    }

    /// Saves persisted preferences to disk.
    ///
    /// # Errors
    /// Returns an error if the parent directory cannot be created
    /// or the file cannot be written.
    pub fn save(&mut self, state: &PersistedState) -> Result<()> {
        state.apply_to(&mut self.store);
        self.atomic_save()
    }

    /// Atomically saves the current contents to disk.
    ///
    /// Writes to a temporary file first, then renames it to the target path.
    fn atomic_save(&self) -> Result<()> {
        if let Some(parent) = self.config_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let temp_path = self.config_path.with_extension("tmp");
        let content = serde_json::to_string_pretty(&self.store)?;
        std::fs::write(&temp_path, content).context("Failed to write temporary config file")?;

        std::fs::rename(&temp_path, &self.config_path)
            .context("Failed to rename temporary config file")?;

        tracing::debug!(path = %self.config_path.display(), "Config saved atomically");

        Ok(())
    }
}
