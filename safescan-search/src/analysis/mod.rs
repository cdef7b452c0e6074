//! Page analysis: keyword matching and safety scoring.
//!
//! Turns fetched markup into a [`PageReport`]: visible text is tokenized,
//! matched against the [`KeywordTable`], and the match density is mapped to
//! a score and [`crate::Rating`].

pub mod keywords;
pub mod scoring;
pub mod tokenizer;

pub use keywords::KeywordTable;
pub use scoring::{score, SafetyScore};
pub use tokenizer::{analyze, TextAnalysis};

use url::Url;

use crate::content::visible_text;
use crate::types::PageReport;

/// Analyze the markup of a fetched page.
pub fn analyze_page(url: &str, html: &str, table: &KeywordTable) -> PageReport {
    let text = visible_text(html);
    let analysis = analyze(&text, table);
    let safety = score(analysis.bad_word_total, analysis.token_total);

    PageReport {
        url: url.to_owned(),
        domain: domain_of(url),
        safety_score: safety.rounded(),
        rating: safety.rating,
        bad_word_count: analysis.bad_word_total,
        total_word_count: analysis.token_total,
        category_analysis: analysis.category_counts,
    }
}

/// Network location of `url`: host, plus the port when one is given
/// explicitly. Unparseable URLs yield an empty string.
pub fn domain_of(url: &str) -> String {
    let Ok(parsed) = Url::parse(url) else {
        return String::new();
    };
    let host = parsed.host_str().unwrap_or_default();
    match parsed.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_owned(),
    }
}
