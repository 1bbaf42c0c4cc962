//! Project directory generation
//!
//! Picks the next free index for a target directory, turns it into a name,
//! creates the directory, and advances the store. The store is only touched
//! when a directory was actually created.

mod create;
mod scan;
mod select;

use std::path::{Path, PathBuf};

use crate::error::AppError;
use crate::naming::{assemble, prefix_for};
use crate::store::IndexStore;

use create::{CreateOutcome, create_project_dir};
use scan::UsedPrefixes;
use select::select_index;

/// Inputs for one generation run
#[derive(Debug, Clone)]
pub(crate) struct ProjectRequest {
    pub(crate) keywords: Vec<String>,
    /// Empty when no suffix is wanted
    pub(crate) suffix: String,
    /// Absolute target directory; also the store key
    pub(crate) directory: PathBuf,
    pub(crate) dry_run: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ProjectStatus {
    Created,
    AlreadyExists,
    DryRun,
}

impl ProjectStatus {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::Created => "created",
            ProjectStatus::AlreadyExists => "exists",
            ProjectStatus::DryRun => "dry_run",
        }
    }
}

impl From<CreateOutcome> for ProjectStatus {
    fn from(outcome: CreateOutcome) -> Self {
        match outcome {
            CreateOutcome::Created => ProjectStatus::Created,
            CreateOutcome::AlreadyExists => ProjectStatus::AlreadyExists,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct GeneratedProject {
    pub(crate) index: u64,
    pub(crate) prefix: String,
    pub(crate) name: String,
    pub(crate) path: PathBuf,
    pub(crate) status: ProjectStatus,
}

/// Store key for a target directory
pub(crate) fn directory_key(directory: &Path) -> String {
    directory.to_string_lossy().into_owned()
}

/// Run the generation pipeline against `store`.
///
/// Returns `AlreadyExists` without touching the store when the assembled path
/// is taken. A dry run stops before creating anything.
pub(crate) fn generate(
    store: &mut IndexStore,
    request: &ProjectRequest,
) -> Result<GeneratedProject, AppError> {
    if request.keywords.is_empty() {
        return Err(AppError::NoKeywords);
    }

    let key = directory_key(&request.directory);
    let last_index = store.last_index(&key);
    let used = UsedPrefixes::scan(&request.directory)?;
    tracing::debug!(
        dir = %key,
        last_index = ?last_index,
        used = ?used.leading_segments(),
        "scanned target directory"
    );

    let index = select_index(last_index, &used);
    let prefix = prefix_for(index);
    let name = assemble(&prefix, &request.keywords, &request.suffix);
    let path = request.directory.join(&name);
    tracing::debug!(index, %prefix, "selected index");

    let status = if request.dry_run {
        ProjectStatus::DryRun
    } else {
        let outcome = create_project_dir(&path)?;
        if outcome == CreateOutcome::Created {
            store.advance(&key, index);
        }
        outcome.into()
    };

    Ok(GeneratedProject {
        index,
        prefix,
        name,
        path,
        status,
    })
}
