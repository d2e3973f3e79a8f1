use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
/// Errors returned while loading or validating [`Config`](super::Config).
pub enum ConfigError {
    /// `TALON_PORT` was not a number.
    #[error("invalid port '{value}': {source}")]
    PortParseError {
        /// Raw environment value.
        value: String,
        /// Parse failure.
        source: std::num::ParseIntError,
    },

    /// `TALON_PORT` was zero.
    #[error("invalid port '{value}': port must be non-zero")]
    InvalidPort {
        /// Raw environment value.
        value: String,
    },

    /// `TALON_BIND_ADDR` was not a valid IP address.
    #[error("invalid bind address '{value}': {source}")]
    InvalidBindAddr {
        /// Raw environment value.
        value: String,
        /// Parse failure.
        source: std::net::AddrParseError,
    },

    /// A configured path exists but is not a directory.
    #[error("path exists but is not a directory: {path}")]
    NotADirectory {
        /// Offending path.
        path: PathBuf,
    },

    /// A configured path exists but is not a regular file.
    #[error("path exists but is not a file: {path}")]
    NotAFile {
        /// Offending path.
        path: PathBuf,
    },

    /// Embedding dimensionality must be non-zero.
    #[error("embedding dimensionality must be non-zero")]
    InvalidEmbeddingDim,

    /// Top-k settings must be non-zero.
    #[error("top-k settings must be non-zero")]
    InvalidTopK,

    /// Provider timeout must be non-zero.
    #[error("provider timeout must be non-zero")]
    InvalidTimeout,
}
