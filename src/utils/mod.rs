//! Utility modules for the vidgrab crate
//!
//! This module contains the reusable scraping toolkit shared by all
//! extractors: HTTP fetching, URL handling, regex/HTML helpers and
//! descriptor parsers.

pub mod html;
pub mod html5_media;
pub mod http_client;
pub mod url;
pub mod xml;

// Re-export commonly used types for convenience
pub use http_client::{PageClient, StandardHttpClient};
