//! HTTP client construction for search and page requests.
//!
//! Both clients carry the fixed browser User-Agent and the per-request
//! timeout. Neither keeps a cookie store, so nothing set by one user's
//! search leaks into the next request. Only the page client may skip
//! certificate verification; the search engine is always verified.

use crate::config::AnalyzerConfig;
use crate::error::SearchError;
use std::time::Duration;

/// Build the [`reqwest::Client`] used for search engine requests.
///
/// Certificate verification is always on, regardless of
/// `accept_invalid_certs`.
///
/// # Errors
///
/// Returns [`SearchError::Http`] if the client cannot be constructed.
pub fn build_search_client(config: &AnalyzerConfig) -> Result<reqwest::Client, SearchError> {
    base_builder(config)
        .build()
        .map_err(|e| SearchError::Http(format!("failed to build search client: {e}")))
}

/// Build the [`reqwest::Client`] used to download result pages.
///
/// Certificate verification is disabled when `accept_invalid_certs` is set,
/// since result pages are arbitrary third-party sites.
///
/// # Errors
///
/// Returns [`SearchError::Http`] if the client cannot be constructed.
pub fn build_page_client(config: &AnalyzerConfig) -> Result<reqwest::Client, SearchError> {
    base_builder(config)
        .danger_accept_invalid_certs(config.accept_invalid_certs)
        .build()
        .map_err(|e| SearchError::Http(format!("failed to build page client: {e}")))
}

fn base_builder(config: &AnalyzerConfig) -> reqwest::ClientBuilder {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.as_str())
        .redirect(reqwest::redirect::Policy::limited(10))
}
