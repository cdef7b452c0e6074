//! Word tokenization and keyword matching.
//!
//! Tokens are maximal runs of Unicode alphanumeric characters from the
//! lowercased text, so punctuation never becomes a token. A token matches a
//! category when any of the category's keywords is a substring of it:
//! "bloodshed" matches "blood", and "sextant" matches "sex".

use std::collections::BTreeMap;

use super::keywords::KeywordTable;

/// Keyword statistics for one page of text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextAnalysis {
    /// Matching tokens per category. Every category in the table is present.
    pub category_counts: BTreeMap<String, usize>,
    /// Sum of all category counts.
    pub bad_word_total: usize,
    /// Number of tokens in the text.
    pub token_total: usize,
}

/// Split lowercased `text` into word tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Count keyword matches per category in `text`.
///
/// A token that matches several categories counts once in each of them, so
/// `bad_word_total` can exceed `token_total`.
pub fn analyze(text: &str, table: &KeywordTable) -> TextAnalysis {
    let tokens = tokenize(text);

    let category_counts: BTreeMap<String, usize> = table
        .categories()
        .map(|(category, keywords)| {
            let matches = tokens
                .iter()
                .filter(|token| keywords.iter().any(|k| token.contains(k.as_str())))
                .count();
            (category.to_owned(), matches)
        })
        .collect();

    TextAnalysis {
        bad_word_total: category_counts.values().sum(),
        token_total: tokens.len(),
        category_counts,
    }
}
