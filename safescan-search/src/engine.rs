//! Trait definition for pluggable search providers.
//!
//! A provider turns a query into an ordered list of result URLs. The
//! production provider scrapes Google's HTML results page; tests plug in
//! canned providers through the same trait.

use crate::error::SearchError;

/// A pluggable search backend.
///
/// Implementors handle their own:
///
/// - URL construction with query encoding
/// - HTTP request with appropriate headers
/// - HTML parsing of result links
///
/// All implementations must be `Send + Sync` so the analyzer can be shared
/// across server tasks.
pub trait SearchProvider: Send + Sync {
    /// Search for `query` and return at most `limit` result URLs in
    /// document order.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] if the request fails or the response cannot be
    /// parsed. Callers treat any error as "no results".
    fn search(
        &self,
        query: &str,
        limit: usize,
    ) -> impl std::future::Future<Output = Result<Vec<String>, SearchError>> + Send;

    /// Human-readable provider name, used in logs.
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A provider returning a fixed list, or failing when the list is empty.
    struct MockProvider {
        urls: Vec<String>,
    }

    impl SearchProvider for MockProvider {
        async fn search(&self, _query: &str, limit: usize) -> Result<Vec<String>, SearchError> {
            if self.urls.is_empty() {
                return Err(SearchError::Parse("mock provider failure".into()));
            }
            Ok(self.urls.iter().take(limit).cloned().collect())
        }

        fn name(&self) -> &'static str {
            "Mock"
        }
    }

    #[test]
    fn mock_provider_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MockProvider>();
    }

    #[tokio::test]
    async fn mock_provider_respects_limit() {
        let provider = MockProvider {
            urls: vec![
                "https://a.example".into(),
                "https://b.example".into(),
                "https://c.example".into(),
            ],
        };
        let urls = provider.search("test", 2).await.expect("should succeed");
        assert_eq!(urls, vec!["https://a.example", "https://b.example"]);
    }

    #[tokio::test]
    async fn mock_provider_propagates_errors() {
        let provider = MockProvider { urls: vec![] };
        let err = provider.search("test", 10).await.unwrap_err();
        assert!(err.to_string().contains("mock provider failure"));
        assert_eq!(provider.name(), "Mock");
    }
}
