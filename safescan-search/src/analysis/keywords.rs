//! Category keyword table.
//!
//! Maps each sensitive-content category to lowercase keyword fragments.
//! Built once at startup and only read afterwards.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Read-only mapping from category name to keyword substrings.
///
/// Keywords are stored lowercased with blanks removed, whichever way the
/// table was built (default, [`KeywordTable::new`], or deserialization).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<String, Vec<String>>",
    into = "BTreeMap<String, Vec<String>>"
)]
pub struct KeywordTable {
    categories: BTreeMap<String, Vec<String>>,
}

impl KeywordTable {
    /// Build a table from `(category, keywords)` pairs.
    ///
    /// Keywords are trimmed and lowercased; empty keywords are dropped so
    /// they cannot match every token. A repeated category name replaces the
    /// earlier entry.
    pub fn new<C, K, S>(categories: C) -> Self
    where
        C: IntoIterator<Item = (S, K)>,
        K: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let categories = categories
            .into_iter()
            .map(|(name, keywords)| {
                let keywords = keywords
                    .into_iter()
                    .map(|k| k.into().trim().to_lowercase())
                    .filter(|k| !k.is_empty())
                    .collect();
                (name.into(), keywords)
            })
            .collect();
        Self { categories }
    }

    /// Iterate over `(category, keywords)` in category-name order.
    pub fn categories(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.categories
            .iter()
            .map(|(name, keywords)| (name.as_str(), keywords.as_slice()))
    }

    /// Keywords for a single category, if present.
    pub fn keywords(&self, category: &str) -> Option<&[String]> {
        self.categories.get(category).map(Vec::as_slice)
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether the table has no categories.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self::new([
            (
                "violence",
                vec![
                    "violence", "murder", "fight", "weapons", "blood", "death", "fatal",
                ],
            ),
            (
                "adult_content",
                vec!["pornography", "adult", "sex", "nude", "naked"],
            ),
            (
                "drugs",
                vec!["drugs", "cocaine", "heroin", "marijuana", "opium"],
            ),
            (
                "discrimination",
                vec!["discrimination", "racism", "sexism"],
            ),
            ("gambling", vec!["gambling", "casino", "betting"]),
            ("fraud", vec!["fraud", "hacking", "scamming", "theft"]),
        ])
    }
}

impl From<BTreeMap<String, Vec<String>>> for KeywordTable {
    fn from(map: BTreeMap<String, Vec<String>>) -> Self {
        Self::new(map)
    }
}

impl From<KeywordTable> for BTreeMap<String, Vec<String>> {
    fn from(table: KeywordTable) -> Self {
        table.categories
    }
}
