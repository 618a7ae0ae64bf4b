//! Extractor trait definition
//!
//! The trait is the seam between the dispatch layer and the per-site
//! scraping logic: the registry only needs `suitable` and `extract`, while
//! `match_id` exposes the site-specific id for callers that want it without
//! paying for a full extraction.

use async_trait::async_trait;
use url::Url;

use crate::errors::AppResult;
use crate::models::Extraction;

/// A single-site media extractor
#[async_trait]
pub trait Extractor: Send + Sync {
    /// Short site name, used for dispatch logging
    fn name(&self) -> &'static str;

    /// Whether this extractor recognizes the URL
    fn suitable(&self, url: &Url) -> bool {
        self.match_id(url).is_some()
    }

    /// Extract the site-specific media id from a recognized URL
    ///
    /// Returns `None` when the URL does not match; this check never
    /// performs network access.
    fn match_id(&self, url: &Url) -> Option<String>;

    /// Resolve the watch page into a final result record
    ///
    /// All failures are terminal for the call; nothing is retried here.
    async fn extract(&self, url: &Url) -> AppResult<Extraction>;
}
