//! Site extractors
//!
//! Each extractor turns one site's watch-page URL into a normalized
//! extraction result. The registry dispatches a URL to the first extractor
//! that recognizes it.

pub mod miomio;
pub mod registry;
pub mod traits;

pub use miomio::MioMioExtractor;
pub use registry::ExtractorRegistry;
pub use traits::Extractor;
