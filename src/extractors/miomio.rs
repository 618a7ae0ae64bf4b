//! miomio.tv watch-page extractor
//!
//! Watch pages embed one of two mutually exclusive player schemes. The
//! legacy flash player carries an inline `flashvars` config whose query
//! string points at an XML descriptor listing the media segments; the newer
//! `_h5` player is a sub-page with ordinary HTML5 `<video>` markup. This
//! extractor detects which scheme is present and normalizes both into the
//! same segment list.
//!
//! Every scraping pattern is a named accessor so site-format drift can be
//! patched in one place.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use async_trait::async_trait;
use rand::Rng;
use regex::Regex;
use tracing::debug;
use url::Url;

use crate::errors::{AppResult, ExtractorError};
use crate::extractors::traits::Extractor;
use crate::models::{Extraction, MediaSegment, flatten_entries};
use crate::utils::html::{search_meta, search_regex, unescape_entities};
use crate::utils::html5_media;
use crate::utils::http_client::PageClient;
use crate::utils::url::UrlUtils;
use crate::utils::xml::{int_or_none, parse_player_config, scaled_int_or_none};

const SITE_ORIGIN: &str = "http://www.miomio.tv";
const WARMUP_ENDPOINT: &str = "http://www.miomio.tv/mioplayer/mioplayerconfigfiles/xml.php";
const CONFIG_ENDPOINT: &str = "http://www.miomio.tv/mioplayer/mioplayerconfigfiles/sina.php";

/// Watch-page URL shape; the numeric capture is the video id
fn watch_url_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^https?://(?:www\.)?miomio\.tv/watch/cc(?P<id>[0-9]+)")
            .expect("valid watch URL pattern")
    })
}

/// Relative path of whichever player variant the page embeds
fn player_path_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"src="(/mioplayer(?:_h5)?/[^"]+)""#).expect("valid player path pattern")
    })
}

/// Inline key-value config string of the legacy flash player
fn flashvars_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"flashvars="type=(?:sina|video)&amp;(.+?)&amp;"#)
            .expect("valid flashvars pattern")
    })
}

/// Extractor for miomio.tv watch pages
pub struct MioMioExtractor {
    client: Arc<dyn PageClient>,
}

impl MioMioExtractor {
    pub fn new(client: Arc<dyn PageClient>) -> Self {
        Self { client }
    }

    /// Legacy branch: inline flashvars config plus XML descriptor
    async fn extract_mioplayer(
        &self,
        webpage: &str,
        video_id: &str,
        title: &str,
        mioplayer_path: &str,
    ) -> AppResult<(Vec<MediaSegment>, HashMap<String, String>)> {
        let referer = format!("{SITE_ORIGIN}{mioplayer_path}");
        let http_headers =
            HashMap::from([("Referer".to_string(), referer.clone())]);

        let xml_config = search_regex(flashvars_regex(), webpage, "xml config")?;
        let xml_config = unescape_entities(&xml_config);

        // Skipping this request causes lags and eventually connection
        // drop-outs on the descriptor fetch, so it stays even though the
        // response is discarded.
        let cache_buster: u32 = rand::rng().random_range(100..=999);
        self.client
            .fire_and_forget(&format!("{WARMUP_ENDPOINT}?id={video_id}&r={cache_buster}"))
            .await;

        // The descriptor holds the actual configuration of the video file(s)
        let descriptor = self
            .client
            .fetch_text_with_headers(
                &format!("{CONFIG_ENDPOINT}?{xml_config}"),
                &[("Referer", referer.as_str())],
            )
            .await?;
        let config = parse_player_config(&descriptor)?;

        // A missing, non-numeric or zero timelength all mean the site has
        // nothing playable behind this descriptor
        if int_or_none(config.timelength.as_deref()).is_none_or(|n| n == 0) {
            return Err(ExtractorError::unavailable("Unable to load videos!").into());
        }

        let mut entries = Vec::new();
        for durl in &config.durls {
            let Some(segment_url) = &durl.url else {
                continue;
            };
            let mut segment_id = video_id.to_string();
            let mut segment_title = title.to_string();
            if let Some(order) = &durl.order {
                segment_id.push_str(&format!("-{order}"));
                segment_title.push_str(&format!(" part {order}"));
            }
            entries.push(MediaSegment {
                id: segment_id,
                url: segment_url.clone(),
                title: segment_title,
                duration: scaled_int_or_none(durl.length.as_deref(), 1000),
                http_headers: http_headers.clone(),
            });
        }

        Ok((entries, http_headers))
    }

    /// h5 branch: fetch the player sub-page and parse its HTML5 markup
    async fn extract_h5(
        &self,
        page_url: &str,
        mioplayer_path: &str,
        video_id: &str,
        title: &str,
    ) -> AppResult<(Vec<MediaSegment>, HashMap<String, String>)> {
        let player_url = UrlUtils::join(page_url, mioplayer_path)
            .map_err(|e| ExtractorError::parse(format!("Invalid player URL: {e}")))?;

        debug!("Downloading player webpage: {}", player_url);
        let player_page = self
            .client
            .fetch_text_with_headers(&player_url, &[("Referer", page_url)])
            .await?;

        let http_headers =
            HashMap::from([("Referer".to_string(), player_url.clone())]);

        let raw_entries = html5_media::parse_media_entries(&player_url, &player_page);
        let multiple = raw_entries.len() > 1;
        let entries = raw_entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                // HTML5 markup carries no per-entry naming; positional
                // suffixes keep ids unique when there is more than one
                let (id, entry_title) = if multiple {
                    (
                        format!("{video_id}-{}", index + 1),
                        format!("{title} part {}", index + 1),
                    )
                } else {
                    (video_id.to_string(), title.to_string())
                };
                MediaSegment {
                    id,
                    url: entry.url,
                    title: entry_title,
                    duration: None,
                    http_headers: http_headers.clone(),
                }
            })
            .collect();

        Ok((entries, http_headers))
    }
}

#[async_trait]
impl Extractor for MioMioExtractor {
    fn name(&self) -> &'static str {
        "miomio.tv"
    }

    fn match_id(&self, url: &Url) -> Option<String> {
        watch_url_regex()
            .captures(url.as_str())
            .and_then(|caps| caps.name("id"))
            .map(|m| m.as_str().to_string())
    }

    async fn extract(&self, url: &Url) -> AppResult<Extraction> {
        let video_id = self
            .match_id(url)
            .ok_or_else(|| ExtractorError::unsupported_url(url.as_str()))?;

        let webpage = self.client.fetch_text(url.as_str()).await?;

        let title = search_meta(&webpage, "description")
            .ok_or_else(|| ExtractorError::missing_field("title"))?;

        let mioplayer_path = search_regex(player_path_regex(), &webpage, "ref_path")?;

        let (entries, http_headers) = if mioplayer_path.contains("_h5") {
            self.extract_h5(url.as_str(), &mioplayer_path, &video_id, &title)
                .await?
        } else {
            self.extract_mioplayer(&webpage, &video_id, &title, &mioplayer_path)
                .await?
        };

        Ok(flatten_entries(&video_id, &title, http_headers, entries))
    }
}
