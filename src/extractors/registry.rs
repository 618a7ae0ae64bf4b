//! Extractor registry and URL dispatch
//!
//! The registry owns the ordered list of site extractors and routes a URL
//! to the first one that recognizes it. New sites are added by registering
//! another extractor; the dispatch code never changes.

use std::sync::Arc;

use tracing::debug;
use url::Url;

use crate::errors::{AppResult, ExtractorError};
use crate::extractors::miomio::MioMioExtractor;
use crate::extractors::traits::Extractor;
use crate::models::Extraction;
use crate::utils::http_client::PageClient;

/// Ordered collection of site extractors
pub struct ExtractorRegistry {
    extractors: Vec<Arc<dyn Extractor>>,
}

impl ExtractorRegistry {
    /// Create a registry with all built-in extractors sharing one client
    pub fn new(client: Arc<dyn PageClient>) -> Self {
        let mut registry = Self::empty();
        registry.register(Arc::new(MioMioExtractor::new(client)));
        registry
    }

    /// Create a registry with no extractors registered
    pub fn empty() -> Self {
        Self {
            extractors: Vec::new(),
        }
    }

    /// Register an extractor at the end of the dispatch order
    pub fn register(&mut self, extractor: Arc<dyn Extractor>) {
        self.extractors.push(extractor);
    }

    /// Find the first extractor that recognizes the URL
    pub fn find(&self, url: &Url) -> Option<Arc<dyn Extractor>> {
        self.extractors.iter().find(|e| e.suitable(url)).cloned()
    }

    /// Dispatch a URL string to its extractor and run the extraction
    pub async fn extract(&self, url: &str) -> AppResult<Extraction> {
        let parsed = Url::parse(url)
            .map_err(|_| ExtractorError::unsupported_url(url))?;

        let extractor = self
            .find(&parsed)
            .ok_or_else(|| ExtractorError::unsupported_url(url))?;

        debug!("Dispatching {} to extractor '{}'", url, extractor.name());
        extractor.extract(&parsed).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::http_client::StandardHttpClient;

    fn registry() -> ExtractorRegistry {
        ExtractorRegistry::new(Arc::new(StandardHttpClient::new()))
    }

    #[test]
    fn test_watch_url_is_dispatched_to_miomio() {
        let url = Url::parse("http://www.miomio.tv/watch/cc88912/").unwrap();
        let extractor = registry().find(&url).expect("extractor should match");
        assert_eq!(extractor.name(), "miomio.tv");
    }

    #[test]
    fn test_unrelated_url_finds_no_extractor() {
        let url = Url::parse("http://example.com/watch/cc88912/").unwrap();
        assert!(registry().find(&url).is_none());
    }

    #[tokio::test]
    async fn test_extract_rejects_unparseable_url_without_io() {
        let err = registry().extract("not a url").await.unwrap_err();
        assert!(matches!(
            err,
            crate::errors::AppError::Extractor(ExtractorError::UnsupportedUrl { .. })
        ));
    }
}
