use std::time::Instant;

use reqwest::header::CONTENT_TYPE;

use crate::cache::CacheEntry;
use crate::error::AppError;
use crate::metrics::THUMBNAIL_FETCH_LATENCY;
use crate::models::{ThumbnailLink, ThumbnailLinks};

/// Best first. Fetches walk down this list until one succeeds.
pub const QUALITIES: &[&str] = &["maxresdefault", "sddefault", "hqdefault", "mqdefault", "default"];

pub fn parse_quality(name: &str) -> Option<&'static str> {
    let name = name.trim().trim_end_matches(".jpg");
    QUALITIES.iter().copied().find(|q| q.eq_ignore_ascii_case(name))
}

/// Qualities to try, starting at `start`.
pub fn fallback_chain(start: &str) -> &'static [&'static str] {
    let from = QUALITIES.iter().position(|q| *q == start).unwrap_or(0);
    &QUALITIES[from..]
}

pub fn thumbnail_url(base: &str, video_id: &str, quality: &str) -> String {
    format!("{}/vi/{video_id}/{quality}.jpg", base.trim_end_matches('/'))
}

pub fn links(base: &str, video_id: &str) -> ThumbnailLinks {
    ThumbnailLinks {
        video_id: video_id.to_string(),
        thumbnails: QUALITIES
            .iter()
            .map(|&quality| ThumbnailLink {
                quality,
                url: thumbnail_url(base, video_id, quality),
            })
            .collect(),
    }
}

// Fetch the best available thumbnail at or below `start`
pub async fn fetch_with_fallback(
    client: &reqwest::Client,
    base: &str,
    video_id: &str,
    start: &str,
) -> Result<CacheEntry, AppError> {
    let _timer = THUMBNAIL_FETCH_LATENCY.start_timer();

    for &quality in fallback_chain(start) {
        let url = thumbnail_url(base, video_id, quality);
        let res = client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("thumbnail request failed: {e}")))?;

        if !res.status().is_success() {
            tracing::debug!(video_id, quality, status = %res.status(), "thumbnail missing, falling back");
            continue;
        }

        let content_type = res
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("image/jpeg")
            .to_string();
        let body = res
            .bytes()
            .await
            .map_err(|e| AppError::Upstream(format!("thumbnail body failed: {e}")))?;

        return Ok(CacheEntry {
            body,
            content_type,
            quality,
            created_at: Instant::now(),
        });
    }

    Err(AppError::Upstream(format!("no thumbnail available for {video_id}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quality_names_are_forgiving() {
        assert_eq!(parse_quality("HQDefault"), Some("hqdefault"));
        assert_eq!(parse_quality("mqdefault.jpg"), Some("mqdefault"));
        assert_eq!(parse_quality("huge"), None);
    }

    #[test]
    fn fallback_starts_at_requested_quality() {
        assert_eq!(fallback_chain("maxresdefault").len(), 5);
        assert_eq!(fallback_chain("hqdefault"), &["hqdefault", "mqdefault", "default"]);
        assert_eq!(fallback_chain("default"), &["default"]);
    }

    #[test]
    fn urls_ignore_trailing_slash() {
        assert_eq!(
            thumbnail_url("https://img.youtube.com/", "dQw4w9WgXcQ", "hqdefault"),
            "https://img.youtube.com/vi/dQw4w9WgXcQ/hqdefault.jpg"
        );
        let all = links("https://img.youtube.com", "dQw4w9WgXcQ");
        assert_eq!(all.thumbnails.len(), QUALITIES.len());
        assert_eq!(all.thumbnails[0].quality, "maxresdefault");
    }
}
