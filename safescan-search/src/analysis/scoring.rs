//! Keyword density to safety score and rating.
//!
//! Formula:
//!
//! ```text
//! penalty = bad_word_total / token_total * 50.0   (0 when token_total == 0)
//! score   = max(0, 10.0 - penalty)
//! ```
//!
//! A keyword density of 2% therefore costs one full point, and any page at
//! 20% density or above scores 0.

use crate::types::Rating;

/// Score of a page with no keyword matches.
pub const BASE_SCORE: f64 = 10.0;

/// Penalty multiplier applied to keyword density.
pub const PENALTY_SCALE: f64 = 50.0;

/// Unrounded score together with its rating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SafetyScore {
    pub score: f64,
    pub rating: Rating,
}

impl SafetyScore {
    /// The score rounded to two decimal places for presentation.
    pub fn rounded(&self) -> f64 {
        round2(self.score)
    }
}

/// Compute the safety score and rating for a page.
pub fn score(bad_word_total: usize, token_total: usize) -> SafetyScore {
    let penalty = if token_total > 0 {
        (bad_word_total as f64 / token_total as f64) * PENALTY_SCALE
    } else {
        0.0
    };
    let score = (BASE_SCORE - penalty).max(0.0);
    SafetyScore {
        score,
        rating: rating_for(score),
    }
}

/// Map a score to its rating. Lower bounds are inclusive.
pub fn rating_for(score: f64) -> Rating {
    if score >= 9.0 {
        Rating::VeryGood
    } else if score >= 8.0 {
        Rating::Good
    } else if score >= 7.0 {
        Rating::Bad
    } else {
        Rating::VeryBad
    }
}

/// Round through the exact decimal expansion, so exact ties go to even
/// (`8.125` -> `8.12`) and binary near-ties follow the stored value
/// (`2.675` -> `2.67`).
fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}
