//! Data models for extraction results
//!
//! This module defines the record shapes an extractor hands back to the
//! caller: individual media segments and the final single-or-playlist
//! result record.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One directly downloadable media stream plus its metadata
///
/// Constructed once per descriptor entry and never mutated afterwards;
/// segments are collected in document order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaSegment {
    pub id: String,
    pub url: String,
    pub title: String,
    /// Duration in whole seconds, when the source descriptor carries one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
    /// HTTP headers a downloader must send when fetching `url`
    pub http_headers: HashMap<String, String>,
}

/// Multi-segment result record sharing one title and set of headers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    /// Record type marker, always `"multi_video"`
    #[serde(rename = "type")]
    pub record_type: String,
    pub id: String,
    pub entries: Vec<MediaSegment>,
    pub title: String,
    pub http_headers: HashMap<String, String>,
}

impl Playlist {
    pub fn new(
        id: String,
        title: String,
        entries: Vec<MediaSegment>,
        http_headers: HashMap<String, String>,
    ) -> Self {
        Self {
            record_type: "multi_video".to_string(),
            id,
            entries,
            title,
            http_headers,
        }
    }
}

/// Final extraction result handed to the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Extraction {
    Playlist(Playlist),
    Single(MediaSegment),
}

impl Extraction {
    /// Page-level id of the result record
    pub fn id(&self) -> &str {
        match self {
            Self::Single(segment) => &segment.id,
            Self::Playlist(playlist) => &playlist.id,
        }
    }

    /// Page-level title of the result record
    pub fn title(&self) -> &str {
        match self {
            Self::Single(segment) => &segment.title,
            Self::Playlist(playlist) => &playlist.title,
        }
    }

    /// Number of media segments the record carries
    pub fn entry_count(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Playlist(playlist) => playlist.entries.len(),
        }
    }
}

/// Shape the final result record from an ordered segment sequence
///
/// A single-segment sequence is flattened into one top-level record with its
/// id, title and headers overridden by the page-level values; any positional
/// suffix the segment picked up during construction is discarded because
/// there is nothing to disambiguate. Longer sequences are wrapped as a
/// playlist that preserves each segment's own id and title.
pub fn flatten_entries(
    video_id: &str,
    title: &str,
    http_headers: HashMap<String, String>,
    mut entries: Vec<MediaSegment>,
) -> Extraction {
    if entries.len() == 1 {
        let mut segment = entries.remove(0);
        segment.id = video_id.to_string();
        segment.title = title.to_string();
        segment.http_headers = http_headers;
        Extraction::Single(segment)
    } else {
        Extraction::Playlist(Playlist::new(
            video_id.to_string(),
            title.to_string(),
            entries,
            http_headers,
        ))
    }
}
