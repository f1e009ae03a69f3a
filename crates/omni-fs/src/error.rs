//! Error types for omni-fs

use std::path::{Path, PathBuf};

/// Result type for omni-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in omni-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Convert a directory-walk failure, preferring the path walkdir reports.
    pub(crate) fn walk(root: &Path, err: walkdir::Error) -> Self {
        let path = err
            .path()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| root.to_path_buf());
        Self::Io {
            path,
            source: err.into(),
        }
    }
}
