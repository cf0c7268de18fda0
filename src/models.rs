use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::links::MediaKind;

pub const DEMO_NOTICE: &str = "Demo version — in production this would call yt-dlp";

// Body shared by the info endpoints
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct UrlRequest {
    pub url: String,
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct YoutubeDownloadRequest {
    pub url: String,
    /// Quality label ("720p", "audio") or itag ("22").
    #[serde(default)]
    pub format: Option<String>,
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct InstagramDownloadRequest {
    pub url: String,
    /// Carousel position, first item when absent.
    #[serde(default)]
    pub index: Option<usize>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct VideoFormat {
    pub itag: u32,
    pub quality: String,
    pub container: String,
    pub has_video: bool,
    pub has_audio: bool,
    pub filesize_bytes: u64,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct VideoInfo {
    pub video_id: String,
    pub title: String,
    pub author: String,
    pub duration_seconds: u32,
    pub view_count: u64,
    pub thumbnail: String,
    pub formats: Vec<VideoFormat>,
    pub notice: String,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct InstagramItem {
    pub index: usize,
    pub kind: &'static str,
    pub url: String,
    pub width: u32,
    pub height: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<u32>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct InstagramInfo {
    pub shortcode: String,
    pub media_type: MediaKind,
    pub owner: String,
    pub caption: String,
    pub like_count: u64,
    pub comment_count: u64,
    pub items: Vec<InstagramItem>,
    pub notice: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DownloadTicket {
    pub id: String,
    pub format: String,
    pub filename: String,
    pub status: String,
    pub message: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Deserialize, Debug)]
pub struct ThumbnailQuery {
    pub url: String,
    #[serde(default)]
    pub quality: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct ThumbnailLink {
    pub quality: &'static str,
    pub url: String,
}

#[derive(Serialize, Debug)]
pub struct ThumbnailLinks {
    pub video_id: String,
    pub thumbnails: Vec<ThumbnailLink>,
}
