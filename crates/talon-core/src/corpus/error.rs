use std::path::PathBuf;
use thiserror::Error;

use crate::storage::StorageError;

#[derive(Debug, Error)]
/// Errors returned by the corpus store.
///
/// An empty corpus is a valid state, not an error; ranking over it simply
/// yields empty results.
pub enum CorpusError {
    /// The raw profiles file could not be read or parsed.
    #[error("profiles file unreadable at {path}: {reason}")]
    ProfilesUnreadable {
        /// Path that was probed.
        path: PathBuf,
        /// Error message.
        reason: String,
    },

    /// Snapshot read/write failed.
    #[error("snapshot storage error: {0}")]
    Storage(#[from] StorageError),

    /// Snapshot bytes could not be (de)serialized.
    #[error("snapshot serialization failed: {reason}")]
    Snapshot {
        /// Error message.
        reason: String,
    },

    /// Snapshot dimensionality does not match the configured value.
    #[error("snapshot dimensionality {actual} does not match configured {expected}")]
    DimensionMismatch {
        /// Configured dimensionality.
        expected: usize,
        /// Dimensionality recorded in the snapshot.
        actual: usize,
    },

    /// A record carries an embedding of the wrong dimensionality.
    #[error("record '{name}' has a {actual}-dimensional embedding, expected {expected}")]
    MalformedRecord {
        /// Record display name.
        name: String,
        /// Configured dimensionality.
        expected: usize,
        /// Dimensionality actually present.
        actual: usize,
    },
}

/// Convenience result type for corpus operations.
pub type CorpusResult<T> = Result<T, CorpusError>;
