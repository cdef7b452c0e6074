//! Search provider implementations.
//!
//! Each module provides a struct implementing [`crate::engine::SearchProvider`]
//! that scrapes a specific search engine's HTML results page.

pub mod google;

pub use google::GoogleSearch;
