//! Error type definitions for the vidgrab application
//!
//! This module defines all error types used throughout the crate,
//! providing a hierarchical error system that makes debugging and error
//! handling more straightforward.

use thiserror::Error;

/// Top-level application error type
///
/// This enum represents all possible errors that can occur in the crate.
/// It uses `thiserror` to provide automatic error trait implementations and
/// proper error chaining.
#[derive(Error, Debug)]
pub enum AppError {
    /// Extraction errors from site extractors
    #[error("Extraction error: {0}")]
    Extractor(#[from] ExtractorError),

    /// HTTP client errors, propagated unchanged from the transport layer
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Generic internal errors
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Extraction specific errors
///
/// Terminal for a single `extract` call. Nothing is caught or retried
/// internally; the caller decides whether to retry, skip, or abort.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// The URL does not match any known extractor pattern.
    /// Raised before any network access.
    #[error("No extractor matches URL: {url}")]
    UnsupportedUrl { url: String },

    /// An expected page element (title, embed path, inline config, ...)
    /// was not found in the fetched markup
    #[error("Unable to extract {field}")]
    MissingField { field: String },

    /// The site reported content that exists but cannot be played.
    /// This is an anticipated, user-facing condition, not a bug.
    #[error("{message}")]
    Unavailable { message: String },

    /// Malformed descriptor data (XML or HTML) that could not be parsed
    #[error("Parse error: {message}")]
    Parse { message: String },
}

impl ExtractorError {
    /// Create an unsupported-URL error
    pub fn unsupported_url<S: Into<String>>(url: S) -> Self {
        Self::UnsupportedUrl { url: url.into() }
    }

    /// Create a missing-field error for a named page element
    pub fn missing_field<S: Into<String>>(field: S) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create an expected, user-facing unavailability error
    pub fn unavailable<S: Into<String>>(message: S) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Whether this failure is an anticipated condition that should be
    /// reported to the user as-is rather than treated as an internal bug
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }
}

/// Convenience methods for creating common error types
impl AppError {
    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Whether the underlying failure is an anticipated extraction condition
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::Extractor(e) if e.is_expected())
    }
}
