//! Error types for the safescan service.

use safescan_search::SearchError;

/// Top-level error type for starting and running the service.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Configuration file could not be parsed or is invalid.
    #[error("config error: {0}")]
    Config(String),

    /// Analyzer construction failed.
    #[error("search error: {0}")]
    Search(#[from] SearchError),

    /// HTTP server bind or serve failure.
    #[error("server error: {0}")]
    Server(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, ServiceError>;
