//! Recognizes the video and post URLs the downloader front-ends accept.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

lazy_static! {
    static ref YOUTUBE_WATCH: Regex = Regex::new(
        r"^(?:https?://)?(?:www\.|m\.|music\.)?youtube\.com/watch/?\?(?:[^#]*&)?v=([A-Za-z0-9_-]{11})(?:[&#].*)?$"
    )
    .unwrap();
    static ref YOUTUBE_PATH: Regex = Regex::new(
        r"^(?:https?://)?(?:(?:www\.|m\.|music\.)?youtube\.com/(?:shorts|embed|live|v)/|youtu\.be/)([A-Za-z0-9_-]{11})(?:[/?&#].*)?$"
    )
    .unwrap();
    static ref INSTAGRAM_MEDIA: Regex = Regex::new(
        r"^(?:https?://)?(?:www\.)?instagram\.com/(?:[A-Za-z0-9_.]+/)?(p|reels?|tv)/([A-Za-z0-9_-]+)/?(?:[?#].*)?$"
    )
    .unwrap();
}

/// Extract the 11-character video id from a YouTube URL.
pub fn youtube_video_id(url: &str) -> Option<String> {
    let url = url.trim();
    YOUTUBE_WATCH
        .captures(url)
        .or_else(|| YOUTUBE_PATH.captures(url))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Post,
    Reel,
    Tv,
}

impl MediaKind {
    pub fn is_video(self) -> bool {
        matches!(self, MediaKind::Reel | MediaKind::Tv)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstagramMedia {
    pub kind: MediaKind,
    pub shortcode: String,
}

pub fn instagram_media(url: &str) -> Option<InstagramMedia> {
    let caps = INSTAGRAM_MEDIA.captures(url.trim())?;
    let kind = match caps.get(1)?.as_str() {
        "p" => MediaKind::Post,
        "tv" => MediaKind::Tv,
        _ => MediaKind::Reel,
    };
    Some(InstagramMedia {
        kind,
        shortcode: caps.get(2)?.as_str().to_string(),
    })
}

#[cfg(test)]
#[path = "links_test.rs"]
mod tests;
