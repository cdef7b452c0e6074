//! Page fetching for result URLs.
//!
//! [`HttpFetcher`] downloads a page body with the page client settings.
//! Any transport error, timeout, or non-2xx status is returned as a typed
//! [`SearchError`] so the orchestrator can degrade that single URL.

use crate::config::AnalyzerConfig;
use crate::error::SearchError;
use crate::http;

/// Something that can download the raw markup of a page.
pub trait PageFetcher: Send + Sync {
    /// Fetch `url` and return its body.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Timeout`] when the request times out and
    /// [`SearchError::Http`] for transport failures and non-2xx statuses.
    fn fetch(
        &self,
        url: &str,
    ) -> impl std::future::Future<Output = Result<String, SearchError>> + Send;
}

/// Fetches pages over HTTP(S) with the configured timeout and User-Agent.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Create a fetcher from the analyzer configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &AnalyzerConfig) -> Result<Self, SearchError> {
        Ok(Self {
            client: http::build_page_client(config)?,
        })
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, SearchError> {
        tracing::trace!(url, "fetching page");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SearchError::from_reqwest(url, e))?
            .error_for_status()
            .map_err(|e| SearchError::Http(format!("{url}: {e}")))?;

        let body = response
            .text()
            .await
            .map_err(|e| SearchError::from_reqwest(url, e))?;

        tracing::trace!(url, bytes = body.len(), "page fetched");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn fetcher(timeout_seconds: u64) -> HttpFetcher {
        let config = AnalyzerConfig {
            timeout_seconds,
            ..Default::default()
        };
        HttpFetcher::new(&config).expect("fetcher")
    }

    #[tokio::test]
    async fn fetch_returns_body_on_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/page"))
            .and(header("user-agent", crate::config::DEFAULT_USER_AGENT))
            .respond_with(ResponseTemplate::new(200).set_body_string("<p>hello</p>"))
            .mount(&server)
            .await;

        let body = fetcher(5)
            .fetch(&format!("{}/page", server.uri()))
            .await
            .expect("fetch should succeed");
        assert_eq!(body, "<p>hello</p>");
    }

    #[tokio::test]
    async fn fetch_rejects_non_success_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_string("not here"))
            .mount(&server)
            .await;

        let err = fetcher(5)
            .fetch(&format!("{}/missing", server.uri()))
            .await
            .unwrap_err();
        assert!(matches!(err, SearchError::Http(_)));
        assert!(err.to_string().contains("404"), "got: {err}");
    }

    #[tokio::test]
    async fn fetch_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/slow"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("late")
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let err = fetcher(1)
            .fetch(&format!("{}/slow", server.uri()))
            .await
            .unwrap_err();
        assert!(matches!(err, SearchError::Timeout(_)), "got: {err}");
    }

    #[tokio::test]
    async fn fetch_reports_connection_failure() {
        // Port 9 (discard) on localhost is closed in test environments.
        let err = fetcher(2).fetch("http://127.0.0.1:9/").await.unwrap_err();
        assert!(matches!(
            err,
            SearchError::Http(_) | SearchError::Timeout(_)
        ));
    }
}
