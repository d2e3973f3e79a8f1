use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
/// Errors returned by snapshot storage.
pub enum StorageError {
    /// Underlying filesystem failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// No snapshot exists at the given path.
    #[error("snapshot not found: {path}")]
    NotFound {
        /// Path that was probed.
        path: PathBuf,
    },
}

/// Convenience result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
