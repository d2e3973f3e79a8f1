use thiserror::Error;

use crate::provider::ProviderError;
use crate::storage::StorageError;

#[derive(Debug, Error)]
/// Errors returned by the embedding cache.
pub enum EmbeddingCacheError {
    /// Empty or whitespace-only input (rejected before any provider call).
    #[error("invalid input: text is empty or whitespace-only")]
    InvalidInput,

    /// The embedding provider failed; nothing was cached.
    #[error("embedding provider unavailable: {0}")]
    Provider(#[from] ProviderError),

    /// Snapshot read/write failed.
    #[error("snapshot storage error: {0}")]
    Storage(#[from] StorageError),

    /// Snapshot bytes could not be (de)serialized.
    #[error("snapshot serialization failed: {reason}")]
    Snapshot {
        /// Error message.
        reason: String,
    },
}

/// Convenience result type for cache operations.
pub type EmbeddingCacheResult<T> = Result<T, EmbeddingCacheError>;
