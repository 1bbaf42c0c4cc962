use std::path::Path;

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CreateOutcome {
    Created,
    /// Something already sits at the path; nothing was touched
    AlreadyExists,
}

/// Create `path` and any missing parents.
pub(crate) fn create_project_dir(path: &Path) -> Result<CreateOutcome, AppError> {
    if path.exists() {
        return Ok(CreateOutcome::AlreadyExists);
    }
    std::fs::create_dir_all(path).map_err(|source| AppError::CreateDir {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(CreateOutcome::Created)
}
