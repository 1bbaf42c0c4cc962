use std::io::ErrorKind;
use std::path::Path;

use crate::consts::SEPARATOR;
use crate::error::AppError;

/// Prefixes already taken by subdirectories of a target directory.
///
/// Best effort: names are split on `-` and compared segment by segment, so
/// unrelated directories that happen to start with a Greek letter count as
/// used. That can only skip an index, never hand out a taken prefix.
#[derive(Debug, Default)]
pub(crate) struct UsedPrefixes {
    names: Vec<Vec<String>>,
}

impl UsedPrefixes {
    /// Read the immediate subdirectories of `dir`. A directory that does not
    /// exist yet has nothing in use.
    pub(crate) fn scan(dir: &Path) -> Result<Self, AppError> {
        let read_err = |source: std::io::Error| AppError::ReadDir {
            path: dir.to_path_buf(),
            source,
        };
        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(dir = %dir.display(), "target directory does not exist yet");
                return Ok(Self::default());
            }
            Err(e) => return Err(read_err(e)),
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(read_err)?;
            // follows symlinks, like a plain is-dir check on the path
            if entry.path().is_dir() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        Ok(Self::from_names(names))
    }

    pub(crate) fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = names
            .into_iter()
            .map(|n| n.as_ref().split(SEPARATOR).map(str::to_string).collect())
            .collect();
        Self { names }
    }

    /// Leading segment of every scanned name, e.g. "alpha" for "alpha-old"
    pub(crate) fn leading_segments(&self) -> Vec<&str> {
        let mut segments: Vec<&str> = self
            .names
            .iter()
            .filter_map(|n| n.first().map(String::as_str))
            .collect();
        segments.sort_unstable();
        segments.dedup();
        segments
    }

    /// Whether some directory name starts with all segments of `prefix`.
    pub(crate) fn contains(&self, prefix: &str) -> bool {
        let wanted: Vec<&str> = prefix.split(SEPARATOR).collect();
        self.names.iter().any(|segments| {
            segments.len() >= wanted.len()
                && segments.iter().zip(&wanted).all(|(have, want)| have == want)
        })
    }
}
