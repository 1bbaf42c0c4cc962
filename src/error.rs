use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("No keywords given (pass at least one non-empty value to --inputs)")]
    NoKeywords,

    #[error("Cannot determine current directory: {0}")]
    CurrentDir(std::io::Error),

    #[error("Cannot determine home directory for the state file (set --state-file or GRAN_STATE_FILE)")]
    NoHomeDir,

    #[error("Failed to read directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{0}")]
    State(#[from] StateError),
}

#[derive(Debug, Error)]
pub(crate) enum StateError {
    #[error("Failed to read state file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write state file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(
        "State file {} uses the legacy global-counter format (last_index = {last_index}); run `gran migrate` to convert it",
        path.display()
    )]
    Legacy { path: PathBuf, last_index: u64 },

    #[error("State file {} has an unrecognized layout: {detail}", path.display())]
    Schema { path: PathBuf, detail: String },

    #[error("State file {} is not in the legacy format; nothing to migrate", path.display())]
    NotLegacy { path: PathBuf },

    #[error("Failed to serialize state: {0}")]
    Serialize(#[from] serde_json::Error),
}
