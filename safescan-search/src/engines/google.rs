//! Google search provider: scrapes organic result links from the HTML page.
//!
//! Result extraction depends on Google's undocumented markup: each organic
//! result link sits inside a `div.yuRUbf` container. When Google changes that
//! markup this provider silently returns no results.

use crate::config::AnalyzerConfig;
use crate::engine::SearchProvider;
use crate::error::SearchError;
use crate::http;
use scraper::{Html, Selector};
use url::Url;

/// Google HTML search scraper.
///
/// Holds one HTTP client built from the analyzer config and reuses it for
/// every query.
pub struct GoogleSearch {
    client: reqwest::Client,
    search_url: Url,
}

impl GoogleSearch {
    /// Create a provider from the analyzer configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if `search_url` is not a valid URL, or
    /// [`SearchError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &AnalyzerConfig) -> Result<Self, SearchError> {
        let search_url = Url::parse(&config.search_url)
            .map_err(|e| SearchError::Config(format!("invalid search_url: {e}")))?;
        Ok(Self {
            client: http::build_search_client(config)?,
            search_url,
        })
    }

    /// Build the results-page URL for `query` requesting `limit` results.
    fn request_url(&self, query: &str, limit: usize) -> Url {
        let mut url = self.search_url.clone();
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("num", &limit.to_string());
        url
    }
}

impl SearchProvider for GoogleSearch {
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<String>, SearchError> {
        tracing::trace!(query, limit, "Google search");

        let url = self.request_url(query, limit);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SearchError::from_reqwest("Google request failed", e))?;

        // Non-success pages (consent walls, 429s) are parsed anyway and
        // simply yield no result containers.
        let status = response.status();
        let html = response
            .text()
            .await
            .map_err(|e| SearchError::from_reqwest("Google response read failed", e))?;

        tracing::trace!(%status, bytes = html.len(), "Google response received");

        parse_google_html(&html, limit)
    }

    fn name(&self) -> &'static str {
        "Google"
    }
}

/// Parse a Google results page into result URLs.
///
/// Extracted as a separate function for testability with fixture HTML.
pub(crate) fn parse_google_html(html: &str, limit: usize) -> Result<Vec<String>, SearchError> {
    let document = Html::parse_document(html);

    let container_sel = Selector::parse("div.yuRUbf")
        .map_err(|e| SearchError::Parse(format!("invalid result selector: {e:?}")))?;
    let link_sel = Selector::parse("a")
        .map_err(|e| SearchError::Parse(format!("invalid link selector: {e:?}")))?;

    let links: Vec<String> = document
        .select(&container_sel)
        .filter_map(|container| container.select(&link_sel).next())
        .filter_map(|link| link.value().attr("href"))
        .map(str::to_owned)
        .take(limit)
        .collect();

    tracing::debug!(count = links.len(), "Google results parsed");
    Ok(links)
}
