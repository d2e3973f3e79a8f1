use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
/// Errors returned by the ranker.
pub enum RankingError {
    /// `k` must be at least 1.
    #[error("top-k must be at least 1")]
    InvalidTopK,

    /// Query and corpus dimensionality diverge (configuration error).
    #[error("dimensionality mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Corpus dimensionality.
        expected: usize,
        /// Offending vector's dimensionality.
        actual: usize,
    },

    /// Unrecognized strategy name (never silently defaulted).
    #[error("unknown ranking strategy '{name}'")]
    UnknownStrategy {
        /// Name as supplied by the caller.
        name: String,
    },

    /// Unrecognized field name in a weights mapping.
    #[error("unknown weight field '{field}' (expected location, skills, bio, or name)")]
    UnknownWeightField {
        /// Field name as supplied by the caller.
        field: String,
    },
}

/// Convenience result type for ranking operations.
pub type RankingResult<T> = Result<T, RankingError>;
