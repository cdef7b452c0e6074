//! Error types for the safescan-search crate.
//!
//! Messages are stable strings suitable for logs. Every network failure in
//! the pipeline is carried as one of these variants up to the orchestrator,
//! which decides how it degrades the final result set.

/// Errors that can occur while searching, fetching, or configuring analysis.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// An HTTP request failed or returned a non-success status.
    #[error("HTTP error: {0}")]
    Http(String),

    /// A request exceeded its timeout.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// Failed to parse a search engine response or a URL.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid analyzer configuration.
    #[error("config error: {0}")]
    Config(String),
}

impl SearchError {
    /// Classify a [`reqwest::Error`] raised while talking to `target`.
    pub(crate) fn from_reqwest(target: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(format!("{target}: {err}"))
        } else {
            Self::Http(format!("{target}: {err}"))
        }
    }
}

/// Convenience type alias for safescan-search results.
pub type Result<T> = std::result::Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_http() {
        let err = SearchError::Http("connection refused".into());
        assert_eq!(err.to_string(), "HTTP error: connection refused");
    }

    #[test]
    fn display_timeout() {
        let err = SearchError::Timeout("exceeded 10s limit".into());
        assert_eq!(err.to_string(), "request timed out: exceeded 10s limit");
    }

    #[test]
    fn display_parse() {
        let err = SearchError::Parse("unexpected HTML structure".into());
        assert_eq!(err.to_string(), "parse error: unexpected HTML structure");
    }

    #[test]
    fn display_config() {
        let err = SearchError::Config("concurrency must be > 0".into());
        assert_eq!(err.to_string(), "config error: concurrency must be > 0");
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SearchError>();
    }
}
