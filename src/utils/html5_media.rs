//! HTML5 `<video>`/`<source>` media entry parsing
//!
//! Newer player pages embed their streams as plain HTML5 markup instead of
//! an XML descriptor. This module scans that markup with named patterns and
//! yields the referenced media URLs in document order, resolved against the
//! player page URL.

use std::sync::OnceLock;

use regex::Regex;

use crate::utils::url::UrlUtils;

/// One media source referenced by HTML5 markup
#[derive(Debug, Clone, PartialEq)]
pub struct Html5MediaEntry {
    /// Absolute media URL
    pub url: String,
    /// Value of the `type` attribute, when present (e.g. `video/mp4`)
    pub mime_type: Option<String>,
}

/// `<video ...>...</video>` blocks, including self-closing tags
fn video_block_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?is)<video\b([^>]*?)(?:/>|>(.*?)</video>)").expect("valid video pattern")
    })
}

/// `<source ...>` tags inside a video block
fn source_tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?is)<source\b([^>]*?)/?>").expect("valid source pattern"))
}

fn src_attr_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"(?i)\bsrc\s*=\s*["']([^"']+)["']"#).expect("valid src pattern"))
}

fn type_attr_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?i)\btype\s*=\s*["']([^"']+)["']"#).expect("valid type pattern")
    })
}

/// Parse all media entries out of HTML5 markup
///
/// Relative `src` values are resolved against `base_url`. An empty result
/// is not an error here; the caller decides how to treat it.
pub fn parse_media_entries(base_url: &str, html: &str) -> Vec<Html5MediaEntry> {
    let mut entries = Vec::new();

    for video in video_block_regex().captures_iter(html) {
        let attrs = video.get(1).map_or("", |m| m.as_str());
        let body = video.get(2).map_or("", |m| m.as_str());

        // src on the <video> tag itself
        if let Some(entry) = entry_from_attrs(base_url, attrs) {
            entries.push(entry);
        }

        // nested <source> tags
        for source in source_tag_regex().captures_iter(body) {
            let source_attrs = source.get(1).map_or("", |m| m.as_str());
            if let Some(entry) = entry_from_attrs(base_url, source_attrs) {
                entries.push(entry);
            }
        }
    }

    entries
}

fn entry_from_attrs(base_url: &str, attrs: &str) -> Option<Html5MediaEntry> {
    let src = src_attr_regex()
        .captures(attrs)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())?;

    let url = UrlUtils::join(base_url, &src).unwrap_or(src);
    let mime_type = type_attr_regex()
        .captures(attrs)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string());

    Some(Html5MediaEntry { url, mime_type })
}
