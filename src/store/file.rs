//! State file persistence
//!
//! The canonical layout is a JSON array of `{"dir", "last_index"}` objects.
//! An older single-counter layout, `{"last_index": N}`, is recognized so it is
//! never misread as per-directory state; it is only accepted by `migrate`.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde_json::Value;
use tempfile::NamedTempFile;

use crate::consts::STATE_FILE_NAME;
use crate::error::StateError;

use super::index::{IndexStore, StateEntry};

/// What was found at the state file path
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum StateLayout {
    /// No file, an empty file, or a file that is not JSON at all
    Missing,
    Scoped(Vec<StateEntry>),
    Legacy(u64),
}

#[derive(Debug, Clone)]
pub(crate) struct StateFile {
    path: PathBuf,
}

impl StateFile {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// `~/.gran_state`
    pub(crate) fn default_path() -> Option<PathBuf> {
        let home = dirs::home_dir()?;
        Some(home.join(STATE_FILE_NAME))
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Load the per-directory store. A legacy or otherwise foreign layout is
    /// an error rather than an empty store.
    pub(crate) fn load(&self) -> Result<IndexStore, StateError> {
        match self.read_layout()? {
            StateLayout::Missing => Ok(IndexStore::new()),
            StateLayout::Scoped(entries) => {
                let store = IndexStore::from_entries(entries);
                tracing::debug!(
                    path = %self.path.display(),
                    entries = store.len(),
                    "loaded state"
                );
                Ok(store)
            }
            StateLayout::Legacy(last_index) => Err(StateError::Legacy {
                path: self.path.clone(),
                last_index,
            }),
        }
    }

    pub(crate) fn read_layout(&self) -> Result<StateLayout, StateError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(StateLayout::Missing),
            Err(source) => {
                return Err(StateError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        if content.trim().is_empty() {
            return Ok(StateLayout::Missing);
        }
        match serde_json::from_str::<Value>(&content) {
            Ok(value) => self.classify(value),
            Err(e) => {
                tracing::warn!("Ignoring unreadable state file {}: {e}", self.path.display());
                Ok(StateLayout::Missing)
            }
        }
    }

    fn classify(&self, value: Value) -> Result<StateLayout, StateError> {
        match value {
            Value::Array(_) => serde_json::from_value::<Vec<StateEntry>>(value)
                .map(StateLayout::Scoped)
                .map_err(|e| self.schema_error(e.to_string())),
            Value::Object(map) => match map.get("last_index") {
                Some(raw) => raw
                    .as_u64()
                    .map(StateLayout::Legacy)
                    .ok_or_else(|| self.schema_error(format!("invalid last_index {raw}"))),
                None => Err(self.schema_error(
                    "expected an array of directory entries".to_string(),
                )),
            },
            other => Err(self.schema_error(format!(
                "expected an array of directory entries, found {}",
                json_kind(&other)
            ))),
        }
    }

    fn schema_error(&self, detail: String) -> StateError {
        StateError::Schema {
            path: self.path.clone(),
            detail,
        }
    }

    /// Write the whole store through a temp file renamed over the target.
    pub(crate) fn save(&self, store: &IndexStore) -> Result<(), StateError> {
        let json = serde_json::to_string_pretty(store.entries())?;
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).map_err(|source| self.write_error(source))?;

        let mut tmp = NamedTempFile::new_in(&dir).map_err(|source| self.write_error(source))?;
        tmp.write_all(json.as_bytes()).map_err(|source| self.write_error(source))?;
        tmp.persist(&self.path).map_err(|e| self.write_error(e.error))?;

        tracing::debug!(
            path = %self.path.display(),
            entries = store.len(),
            "saved state"
        );
        Ok(())
    }

    fn write_error(&self, source: std::io::Error) -> StateError {
        StateError::Write {
            path: self.path.clone(),
            source,
        }
    }

    /// Rewrite a legacy counter file as a single entry for `dir`.
    /// Returns the migrated index.
    pub(crate) fn migrate_legacy(&self, dir: &str) -> Result<u64, StateError> {
        match self.read_layout()? {
            StateLayout::Legacy(last_index) => {
                let mut store = IndexStore::new();
                store.record(dir, last_index);
                self.save(&store)?;
                Ok(last_index)
            }
            StateLayout::Missing if !self.path.exists() => Err(StateError::Read {
                path: self.path.clone(),
                source: std::io::Error::from(ErrorKind::NotFound),
            }),
            StateLayout::Missing | StateLayout::Scoped(_) => Err(StateError::NotLegacy {
                path: self.path.clone(),
            }),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
