//! Analyzer configuration with defaults matching the deployed service.
//!
//! [`AnalyzerConfig`] controls the search endpoint, how many results are
//! analyzed, fan-out width, and per-request HTTP behaviour.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::SearchError;

/// Browser User-Agent sent with every search and page request.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36 Edg/131.0.0.0";

/// Search endpoint queried for result links.
pub const DEFAULT_SEARCH_URL: &str = "https://www.google.com/search";

/// Configuration for a query analysis run.
///
/// Use [`Default::default()`] for the stock behaviour, or construct with
/// field overrides. Deserializes from a partial TOML table; missing fields
/// take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Search endpoint. The query and result count are appended as `q` and `num`.
    pub search_url: String,
    /// Maximum number of search results to fetch and analyze.
    pub max_results: usize,
    /// Number of pages fetched and analyzed at the same time.
    pub concurrency: usize,
    /// Per-request HTTP timeout in seconds.
    pub timeout_seconds: u64,
    /// Skip TLS certificate verification when fetching result pages.
    pub accept_invalid_certs: bool,
    /// User-Agent header for search and page requests.
    pub user_agent: String,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            search_url: DEFAULT_SEARCH_URL.to_owned(),
            max_results: 10,
            concurrency: 5,
            timeout_seconds: 10,
            accept_invalid_certs: true,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl AnalyzerConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `max_results`, `concurrency` and `timeout_seconds` must be greater than 0
    /// - `search_url` must be an absolute URL
    /// - `user_agent` must not be blank
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_results == 0 {
            return Err(SearchError::Config(
                "max_results must be greater than 0".into(),
            ));
        }
        if self.concurrency == 0 {
            return Err(SearchError::Config(
                "concurrency must be greater than 0".into(),
            ));
        }
        if self.timeout_seconds == 0 {
            return Err(SearchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        if let Err(e) = Url::parse(&self.search_url) {
            return Err(SearchError::Config(format!(
                "search_url is not a valid URL: {e}"
            )));
        }
        if self.user_agent.trim().is_empty() {
            return Err(SearchError::Config("user_agent must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_service_constants() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.max_results, 10);
        assert_eq!(config.concurrency, 5);
        assert_eq!(config.timeout_seconds, 10);
        assert!(config.accept_invalid_certs);
        assert_eq!(config.search_url, "https://www.google.com/search");
        assert!(config.user_agent.contains("Edg/131.0.0.0"));
    }

    #[test]
    fn valid_config_passes_validation() {
        assert!(AnalyzerConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_max_results_rejected() {
        let config = AnalyzerConfig {
            max_results: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("max_results"));
    }

    #[test]
    fn zero_concurrency_rejected() {
        let config = AnalyzerConfig {
            concurrency: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("concurrency"));
    }

    #[test]
    fn zero_timeout_rejected() {
        let config = AnalyzerConfig {
            timeout_seconds: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("timeout_seconds"));
    }

    #[test]
    fn relative_search_url_rejected() {
        let config = AnalyzerConfig {
            search_url: "/search".into(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("search_url"));
    }

    #[test]
    fn blank_user_agent_rejected() {
        let config = AnalyzerConfig {
            user_agent: "   ".into(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("user_agent"));
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: AnalyzerConfig = serde_json::from_str(r#"{"concurrency": 2}"#)
            .expect("partial config should deserialize");
        assert_eq!(config.concurrency, 2);
        assert_eq!(config.max_results, 10);
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
    }
}
