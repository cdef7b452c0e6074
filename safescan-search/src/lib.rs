//! # safescan-search
//!
//! Keyword-based safety scoring of web search results.
//!
//! Given a query, this crate asks a search engine for result links, fetches
//! each page, counts sensitive-content keywords in its visible text, and turns
//! the keyword density into a 0–10 safety score and a rating label.
//!
//! ## Design
//!
//! - Scrapes Google's HTML results page with CSS selectors
//! - Fetches result pages concurrently with a fixed upper bound
//! - Substring keyword matching against a read-only [`KeywordTable`]
//! - Best effort: a failed search yields no results, a failed page is dropped
//!
//! ## Security
//!
//! - Result pages are fetched without certificate verification by default
//!   (see [`AnalyzerConfig::accept_invalid_certs`])
//! - Queries are logged only at trace level

pub mod analysis;
pub mod config;
pub mod content;
pub mod engine;
pub mod engines;
pub mod error;
pub mod fetch;
pub mod http;
pub mod orchestrator;
pub mod types;

pub use analysis::KeywordTable;
pub use config::AnalyzerConfig;
pub use engine::SearchProvider;
pub use error::{Result, SearchError};
pub use fetch::{HttpFetcher, PageFetcher};
pub use orchestrator::Analyzer;
pub use types::{AnalysisResult, PageFailure, PageReport, Rating};

/// Analyze the search results for `query` with the default keyword table.
///
/// Builds a one-off [`Analyzer`] from `config`. Long-running callers should
/// build an [`Analyzer`] once and reuse it.
///
/// # Errors
///
/// Returns [`SearchError::Config`] if `config` is invalid. Search and page
/// failures never surface here; they shrink the result list instead.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> safescan_search::Result<()> {
/// let config = safescan_search::AnalyzerConfig::default();
/// let reports = safescan_search::analyze_query("online casino", &config).await?;
/// for report in &reports {
///     println!("{} {} ({})", report.safety_score, report.rating, report.url);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn analyze_query(query: &str, config: &AnalyzerConfig) -> Result<Vec<PageReport>> {
    let analyzer = Analyzer::new(config.clone(), KeywordTable::default())?;
    Ok(analyzer.analyze_query(query).await)
}
