//! URL utilities for consistent URL handling
//!
//! This module provides utilities for URL manipulation and validation that
//! are used throughout the crate.

use url::Url;

/// URL utilities for consistent URL handling
pub struct UrlUtils;

impl UrlUtils {
    /// Parse and validate a URL
    ///
    /// # Arguments
    ///
    /// * `url` - The URL string to validate
    ///
    /// # Returns
    ///
    /// * `Ok(Url)` - Successfully parsed URL
    /// * `Err(url::ParseError)` - Parse error
    pub fn parse_and_validate(url: &str) -> Result<Url, url::ParseError> {
        Url::parse(url)
    }

    /// Join a base URL with a path segment
    ///
    /// This resolves relative references the way a browser would, so a
    /// site-relative path such as `/mioplayer/player.swf` replaces the base
    /// URL's path while keeping its origin.
    ///
    /// # Arguments
    ///
    /// * `base` - The base URL
    /// * `path` - The path to resolve against it
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - Successfully joined URL
    /// * `Err(url::ParseError)` - Parse error
    pub fn join(base: &str, path: &str) -> Result<String, url::ParseError> {
        let base_url = Url::parse(base)?;
        let joined = base_url.join(path)?;
        Ok(joined.to_string())
    }

    /// Extract the domain from a URL
    ///
    /// # Arguments
    ///
    /// * `url` - The URL to extract domain from
    ///
    /// # Returns
    ///
    /// * `Some(String)` - Domain if successfully parsed
    /// * `None` - If URL is invalid or has no domain
    pub fn extract_domain(url: &str) -> Option<String> {
        Url::parse(url)
            .ok()
            .and_then(|u| u.host_str().map(|h| h.to_string()))
    }

    /// Check if a URL is valid
    ///
    /// # Arguments
    ///
    /// * `url` - The URL to check
    ///
    /// # Returns
    ///
    /// `true` if the URL is valid, `false` otherwise
    pub fn is_valid(url: &str) -> bool {
        Self::parse_and_validate(url).is_ok()
    }
}
