use thiserror::Error;

use crate::cache::EmbeddingCacheError;
use crate::provider::ProviderError;
use crate::ranking::RankingError;

#[derive(Debug, Error)]
/// Facade-level errors exposed to the service layer.
pub enum EngineError {
    /// Caller input was empty or malformed (never reached a provider).
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// What was wrong.
        reason: String,
    },

    /// The embedding/completion provider is unavailable.
    #[error("provider unavailable: {0}")]
    ProviderUnavailable(#[source] ProviderError),

    /// Ranking failed (unknown strategy, bad weights, bad top-k, dimension
    /// mismatch).
    #[error(transparent)]
    Ranking(#[from] RankingError),

    /// Unexpected internal failure.
    #[error("internal error: {reason}")]
    Internal {
        /// What went wrong.
        reason: String,
    },
}

impl From<EmbeddingCacheError> for EngineError {
    fn from(e: EmbeddingCacheError) -> Self {
        match e {
            EmbeddingCacheError::InvalidInput => Self::InvalidInput {
                reason: "text is empty or whitespace-only".to_string(),
            },
            EmbeddingCacheError::Provider(p) => Self::ProviderUnavailable(p),
            other => Self::Internal {
                reason: other.to_string(),
            },
        }
    }
}

/// Convenience result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
