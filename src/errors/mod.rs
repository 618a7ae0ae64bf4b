//! Centralized error handling for the vidgrab application
//!
//! This module provides a unified error system across all layers of the
//! crate and keeps the distinction between anticipated, user-facing
//! extraction failures and internal bugs.
//!
//! # Error Categories
//!
//! - **Extractor Errors**: URL dispatch and page/descriptor scraping failures
//! - **Transport Errors**: HTTP fetch failures, propagated unchanged
//! - **Internal Errors**: everything that indicates a bug rather than input
//!
//! # Usage
//!
//! ```rust
//! use vidgrab::errors::{AppError, AppResult};
//!
//! async fn example_function() -> AppResult<String> {
//!     // Function can return any error type that converts to AppError
//!     Ok("success".to_string())
//! }
//! ```

pub mod types;

pub use types::*;

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Convenience type alias for extractor Results
pub type ExtractorResult<T> = Result<T, ExtractorError>;
