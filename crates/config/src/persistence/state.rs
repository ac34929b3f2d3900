//! Persisted preference types.
//!
//! Responsibilities:
//! - Define the persisted user preferences (`PersistedState`).
//! - Define config file errors (`ConfigFileError`).
//! - Read and parse the preferences file.
//!
//! Does NOT handle:
//! - Writing the file (handled by `ConfigManager` via atomic save).
//!
//! Invariants:
//! - `dark_mode` is stored under the `darkMode` key as the literal string `"true"` or `"false"`.
//! - Reading is lenient: only `"true"` (or a JSON `true`) enables dark mode; any other value disables it.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Serialize a bool as the strings `"true"`/`"false"`.
mod string_bool {
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;

    pub fn serialize<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(if *value { "true" } else { "false" })
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) => s == "true",
            Value::Bool(b) => b,
            _ => false,
        })
    }
}

/// User preferences that survive across sessions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedState {
    /// Whether the dark color scheme is enabled.
    #[serde(rename = "darkMode", with = "string_bool", default)]
    pub dark_mode: bool,
}

impl PersistedState {
    /// Read preferences out of a raw key/value store.
    pub(crate) fn from_store(store: &Map<String, Value>) -> Self {
        serde_json::from_value(Value::Object(store.clone())).unwrap_or_default()
    }

    /// Write preferences into a raw key/value store, leaving other keys untouched.
    pub(crate) fn apply_to(&self, store: &mut Map<String, Value>) {
        if let Ok(Value::Object(entries)) = serde_json::to_value(self) {
            store.extend(entries);
        }
    }
}

/// Errors that can occur while reading the preferences file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("Failed to read config file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Reads and parses the preferences file from disk.
///
/// The file must contain a JSON object; anything else is a parse error.
pub(crate) fn read_config_file(path: &Path) -> Result<Map<String, Value>, ConfigFileError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigFileError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json::from_str::<Map<String, Value>>(&content).map_err(|e| ConfigFileError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}
