//! Regex-based HTML scraping helpers
//!
//! Extractors scrape pages with named, independently testable patterns so
//! that site-format drift can be patched in one place. These helpers wrap
//! the common operations: first-capture-group search, meta tag lookup and
//! entity decoding.

use std::sync::OnceLock;

use regex::Regex;

use crate::errors::{ExtractorError, ExtractorResult};

/// Search `haystack` with a pattern and return its first capture group
///
/// # Arguments
/// * `pattern` - Compiled pattern with at least one capture group
/// * `haystack` - The HTML (or other text) to search
/// * `field` - Human-readable name of the element, used in the error
///
/// # Errors
/// Returns [`ExtractorError::MissingField`] when the pattern does not match.
pub fn search_regex(pattern: &Regex, haystack: &str, field: &str) -> ExtractorResult<String> {
    pattern
        .captures(haystack)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| ExtractorError::missing_field(field))
}

/// `<meta>` tag with the name/property attribute before content;
/// group 1 is the tag name, group 2 its content
fn meta_name_first_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r#"(?is)<meta[^>]+(?:name|property)=["']?([^"'\s>]+)["']?[^>]*?content=["']([^"']*)["']"#,
        )
        .expect("valid meta tag pattern")
    })
}

/// `<meta>` tag with the content attribute first;
/// group 1 is the content, group 2 the tag name
fn meta_content_first_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r#"(?is)<meta[^>]+content=["']([^"']*)["'][^>]*?(?:name|property)=["']?([^"'\s>]+)["']?"#,
        )
        .expect("valid meta tag pattern")
    })
}

/// Look up the `content` attribute of a named `<meta>` tag
///
/// Matches both `name=` and `property=` variants and tolerates either
/// attribute order, since sites emit both.
pub fn search_meta(html: &str, name: &str) -> Option<String> {
    for caps in meta_name_first_regex().captures_iter(html) {
        if let Some(m) = caps.get(1)
            && m.as_str().eq_ignore_ascii_case(name)
        {
            return caps.get(2).map(|m| m.as_str().to_string());
        }
    }
    for caps in meta_content_first_regex().captures_iter(html) {
        if let Some(m) = caps.get(2)
            && m.as_str().eq_ignore_ascii_case(name)
        {
            return caps.get(1).map(|m| m.as_str().to_string());
        }
    }
    None
}

/// Decode the named character references this crate encounters in
/// scraped attribute values
pub fn unescape_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
