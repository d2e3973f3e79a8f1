use thiserror::Error;

#[derive(Debug, Error)]
/// Errors returned by the embedding/completion provider.
pub enum ProviderError {
    /// The call exceeded the configured timeout.
    #[error("provider call timed out after {secs}s")]
    Timeout {
        /// Configured timeout in seconds.
        secs: u64,
    },

    /// The underlying request failed (transport, quota, auth).
    #[error("provider request failed: {reason}")]
    RequestFailed {
        /// Error message from the client.
        reason: String,
    },

    /// The provider answered with no usable content.
    #[error("provider returned an empty response")]
    EmptyResponse,

    /// The provider returned a vector of unexpected dimensionality.
    #[error("provider returned a {actual}-dimensional vector, expected {expected}")]
    DimensionMismatch {
        /// Configured dimensionality.
        expected: usize,
        /// Dimensionality actually returned.
        actual: usize,
    },
}

/// Convenience result type for provider operations.
pub type ProviderResult<T> = Result<T, ProviderError>;
