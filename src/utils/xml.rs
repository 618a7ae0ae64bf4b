//! Quick-XML based player descriptor parser
//!
//! This module provides a streaming parser for the legacy player
//! configuration XML using quick-xml. It extracts only the fields the
//! extractor actually uses: the root `timelength` value and the
//! `url`/`order`/`length` children of each `durl` element.

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::errors::{ExtractorError, ExtractorResult};

/// Parsed legacy player descriptor, restricted to the fields we consume
#[derive(Debug, Clone, Default)]
pub struct PlayerConfig {
    /// Raw `timelength` text; semantics are source-dependent, so the
    /// extractor only checks presence and numericness
    pub timelength: Option<String>,
    /// One entry per `durl` element, in document order
    pub durls: Vec<Durl>,
}

/// One `durl` element of the descriptor; all children are optional
#[derive(Debug, Clone, Default)]
pub struct Durl {
    pub url: Option<String>,
    pub order: Option<String>,
    pub length: Option<String>,
}

/// Parse a legacy player descriptor using a streaming quick-xml reader
pub fn parse_player_config(content: &str) -> ExtractorResult<PlayerConfig> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(true);

    let mut config = PlayerConfig::default();
    let mut current_durl: Option<Durl> = None;
    let mut current_text = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                let name = std::str::from_utf8(e.name().as_ref())
                    .map_err(|e| {
                        ExtractorError::parse(format!("Invalid UTF-8 in XML element name: {e}"))
                    })?
                    .to_string();

                if name == "durl" {
                    current_durl = Some(Durl::default());
                }
                current_text.clear();
            }

            Ok(Event::End(ref e)) => {
                let name = std::str::from_utf8(e.name().as_ref())
                    .map_err(|e| {
                        ExtractorError::parse(format!("Invalid UTF-8 in XML element name: {e}"))
                    })?
                    .to_string();

                let text = current_text.trim().to_string();
                match name.as_str() {
                    "timelength" if current_durl.is_none() => {
                        if !text.is_empty() {
                            config.timelength = Some(text);
                        }
                    }
                    "url" => {
                        if let Some(durl) = current_durl.as_mut()
                            && !text.is_empty()
                        {
                            durl.url = Some(text);
                        }
                    }
                    "order" => {
                        if let Some(durl) = current_durl.as_mut()
                            && !text.is_empty()
                        {
                            durl.order = Some(text);
                        }
                    }
                    "length" => {
                        if let Some(durl) = current_durl.as_mut()
                            && !text.is_empty()
                        {
                            durl.length = Some(text);
                        }
                    }
                    "durl" => {
                        if let Some(durl) = current_durl.take() {
                            config.durls.push(durl);
                        }
                    }
                    _ => {}
                }
                current_text.clear();
            }

            Ok(Event::Text(e)) => {
                let text = std::str::from_utf8(&e).map_err(|e| {
                    ExtractorError::parse(format!("Invalid UTF-8 in text: {e}"))
                })?;
                current_text.push_str(text);
            }

            Ok(Event::CData(e)) => {
                let text = std::str::from_utf8(&e).map_err(|e| {
                    ExtractorError::parse(format!("Invalid UTF-8 in CDATA: {e}"))
                })?;
                current_text.push_str(text);
            }

            Ok(Event::Eof) => break,

            Err(e) => {
                return Err(ExtractorError::parse(format!("XML parsing error: {e}")));
            }

            _ => {} // Ignore other events (comments, declarations, etc.)
        }
    }

    Ok(config)
}

/// Lenient integer parse, `None` on absent or non-numeric input
pub fn int_or_none(value: Option<&str>) -> Option<u64> {
    value.and_then(|v| v.trim().parse().ok())
}

/// Lenient integer parse followed by truncating division
///
/// Used for millisecond fields that are reported in whole seconds.
pub fn scaled_int_or_none(value: Option<&str>, scale: u64) -> Option<u64> {
    int_or_none(value).map(|v| v / scale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<video>
  <timelength>5923000</timelength>
  <durl>
    <order>1</order>
    <url><![CDATA[http://cdn.example.com/part1.flv?k=v&t=1]]></url>
    <length>2961500</length>
  </durl>
  <durl>
    <order>2</order>
    <url>http://cdn.example.com/part2.flv</url>
    <length>2961500</length>
  </durl>
</video>"#;

    #[test]
    fn test_parse_full_descriptor() {
        let config = parse_player_config(SAMPLE).unwrap();
        assert_eq!(config.timelength.as_deref(), Some("5923000"));
        assert_eq!(config.durls.len(), 2);
        assert_eq!(
            config.durls[0].url.as_deref(),
            Some("http://cdn.example.com/part1.flv?k=v&t=1")
        );
        assert_eq!(config.durls[0].order.as_deref(), Some("1"));
        assert_eq!(config.durls[1].length.as_deref(), Some("2961500"));
    }

    #[test]
    fn test_parse_descriptor_without_timelength() {
        let config = parse_player_config("<video><durl><url>u</url></durl></video>").unwrap();
        assert_eq!(config.timelength, None);
        assert_eq!(config.durls.len(), 1);
    }

    #[test]
    fn test_durl_without_url_is_kept_for_caller_to_skip() {
        let config =
            parse_player_config("<video><timelength>10</timelength><durl><order>1</order></durl></video>")
                .unwrap();
        assert_eq!(config.durls.len(), 1);
        assert_eq!(config.durls[0].url, None);
    }

    #[test]
    fn test_malformed_xml_is_a_parse_error() {
        let err = parse_player_config("<video><durl></video>").unwrap_err();
        assert!(matches!(err, ExtractorError::Parse { .. }));
    }

    #[rstest]
    #[case(Some("5923000"), Some(5923000))]
    #[case(Some(" 42 "), Some(42))]
    #[case(Some("abc"), None)]
    #[case(Some(""), None)]
    #[case(None, None)]
    fn test_int_or_none(#[case] input: Option<&str>, #[case] expected: Option<u64>) {
        assert_eq!(int_or_none(input), expected);
    }

    #[rstest]
    #[case(Some("5923999"), Some(5923))]
    #[case(Some("999"), Some(0))]
    #[case(None, None)]
    fn test_scaled_int_or_none_truncates(
        #[case] input: Option<&str>,
        #[case] expected: Option<u64>,
    ) {
        assert_eq!(scaled_int_or_none(input, 1000), expected);
    }
}
