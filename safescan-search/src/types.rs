//! Core types for per-page analysis outcomes and safety ratings.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Discrete safety label derived from a page's safety score.
///
/// Thresholds are inclusive lower bounds: `>= 9` is [`Rating::VeryGood`],
/// `>= 8` is [`Rating::Good`], `>= 7` is [`Rating::Bad`], anything lower is
/// [`Rating::VeryBad`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rating {
    #[serde(rename = "Very Good")]
    VeryGood,
    #[serde(rename = "Good")]
    Good,
    #[serde(rename = "Bad")]
    Bad,
    #[serde(rename = "Very Bad")]
    VeryBad,
}

impl Rating {
    /// Returns the human-readable label for this rating.
    pub fn label(&self) -> &'static str {
        match self {
            Self::VeryGood => "Very Good",
            Self::Good => "Good",
            Self::Bad => "Bad",
            Self::VeryBad => "Very Bad",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Successful analysis of a single result page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageReport {
    /// The page URL as returned by the search provider.
    pub url: String,
    /// Network location of the URL (host plus explicit port).
    pub domain: String,
    /// Safety score in `[0, 10]`, rounded to two decimal places.
    pub safety_score: f64,
    /// Rating derived from the unrounded score.
    pub rating: Rating,
    /// Keyword matches summed over all categories.
    pub bad_word_count: usize,
    /// Number of word tokens in the page's visible text.
    pub total_word_count: usize,
    /// Matching token count per keyword category.
    pub category_analysis: BTreeMap<String, usize>,
}

/// A page that could not be analyzed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageFailure {
    /// The page URL as returned by the search provider.
    pub url: String,
    /// Why the page was not analyzed.
    pub message: String,
}

/// Outcome of analyzing one URL, tagged by `status` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum AnalysisResult {
    Success(PageReport),
    Error(PageFailure),
}

impl AnalysisResult {
    /// The URL this result refers to.
    pub fn url(&self) -> &str {
        match self {
            Self::Success(report) => &report.url,
            Self::Error(failure) => &failure.url,
        }
    }

    /// Returns the report if the page was analyzed successfully.
    pub fn into_report(self) -> Option<PageReport> {
        match self {
            Self::Success(report) => Some(report),
            Self::Error(_) => None,
        }
    }
}

impl From<PageReport> for AnalysisResult {
    fn from(report: PageReport) -> Self {
        Self::Success(report)
    }
}
