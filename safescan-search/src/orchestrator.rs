//! Query orchestrator: search, bounded concurrent fetch-and-score, rank.
//!
//! [`Analyzer`] owns everything one analysis needs (config, keyword table,
//! search provider, page fetcher) and is immutable after construction, so a
//! single instance can be shared by reference across concurrent requests.

use futures::stream::{self, StreamExt};

use crate::analysis::{analyze_page, KeywordTable};
use crate::config::AnalyzerConfig;
use crate::engine::SearchProvider;
use crate::engines::GoogleSearch;
use crate::error::SearchError;
use crate::fetch::{HttpFetcher, PageFetcher};
use crate::types::{AnalysisResult, PageFailure, PageReport};

/// Searches, fetches, and scores result pages for a query.
pub struct Analyzer<S = GoogleSearch, F = HttpFetcher> {
    config: AnalyzerConfig,
    keywords: KeywordTable,
    provider: S,
    fetcher: F,
}

impl Analyzer {
    /// Create an analyzer backed by Google search and HTTP page fetching.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if `config` is invalid, or
    /// [`SearchError::Http`] if the HTTP clients cannot be built.
    pub fn new(config: AnalyzerConfig, keywords: KeywordTable) -> Result<Self, SearchError> {
        config.validate()?;
        let provider = GoogleSearch::new(&config)?;
        let fetcher = HttpFetcher::new(&config)?;
        Ok(Self {
            config,
            keywords,
            provider,
            fetcher,
        })
    }
}

impl<S: SearchProvider, F: PageFetcher> Analyzer<S, F> {
    /// Create an analyzer from explicit provider and fetcher implementations.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if `config` is invalid.
    pub fn with_parts(
        config: AnalyzerConfig,
        keywords: KeywordTable,
        provider: S,
        fetcher: F,
    ) -> Result<Self, SearchError> {
        config.validate()?;
        Ok(Self {
            config,
            keywords,
            provider,
            fetcher,
        })
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn keywords(&self) -> &KeywordTable {
        &self.keywords
    }

    /// Analyze every search result for `query`.
    ///
    /// # Pipeline
    ///
    /// 1. Ask the provider for up to `config.max_results` URLs
    /// 2. Fetch and score each URL, at most `config.concurrency` at a time
    /// 3. Drop pages that could not be fetched
    /// 4. Sort by safety score, highest first (stable for ties)
    ///
    /// A failed search is logged and yields an empty list, the same as a
    /// search with no results.
    pub async fn analyze_query(&self, query: &str) -> Vec<PageReport> {
        tracing::trace!(query, "analyzing query");

        let urls = match self.provider.search(query, self.config.max_results).await {
            Ok(urls) => urls,
            Err(err) => {
                tracing::warn!(provider = self.provider.name(), error = %err, "search failed");
                return Vec::new();
            }
        };

        if urls.is_empty() {
            tracing::debug!(provider = self.provider.name(), "search returned no results");
            return Vec::new();
        }

        let candidates = urls.len();
        let outcomes: Vec<AnalysisResult> = stream::iter(urls)
            .map(move |url| async move { self.analyze_url(&url).await })
            .buffer_unordered(self.config.concurrency)
            .collect()
            .await;

        let mut reports: Vec<PageReport> = outcomes
            .into_iter()
            .filter_map(AnalysisResult::into_report)
            .collect();

        reports.sort_by(|a, b| {
            b.safety_score
                .partial_cmp(&a.safety_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        tracing::debug!(candidates, analyzed = reports.len(), "query analysis finished");
        reports
    }

    /// Fetch and score a single page.
    ///
    /// Fetch failures and empty bodies become [`AnalysisResult::Error`];
    /// this never fails.
    pub async fn analyze_url(&self, url: &str) -> AnalysisResult {
        let fetched = match self.fetcher.fetch(url).await {
            Ok(html) if html.is_empty() => {
                Err(SearchError::Http(format!("{url}: empty response body")))
            }
            other => other,
        };

        match fetched {
            Ok(html) => {
                let report = analyze_page(url, &html, &self.keywords);
                tracing::debug!(
                    url,
                    score = report.safety_score,
                    rating = %report.rating,
                    "page analyzed"
                );
                AnalysisResult::Success(report)
            }
            Err(err) => {
                tracing::warn!(url, error = %err, "page could not be loaded");
                AnalysisResult::Error(PageFailure {
                    url: url.to_owned(),
                    message: format!("Could not load the page: {err}"),
                })
            }
        }
    }
}
