//! Mock metadata for the downloader front-ends.
//!
//! Nothing here talks to YouTube or Instagram. Values are drawn from an RNG
//! seeded by the media id, so `info` and `download` for the same URL agree
//! with each other without any shared state.

use chrono::{TimeDelta, Utc};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use sha2::{Digest, Sha256};

use crate::links::InstagramMedia;
use crate::models::{DEMO_NOTICE, DownloadTicket, InstagramInfo, InstagramItem, VideoFormat, VideoInfo};

const ADJECTIVES: &[&str] = &[
    "Ultimate", "Beginner's", "Complete", "Relaxing", "Epic", "Honest", "Quick", "Hidden",
];
const SUBJECTS: &[&str] = &[
    "Guide to Sourdough", "Lo-Fi Mix", "Rust Tutorial", "Mountain Hike", "Street Food Tour",
    "Synth Jam", "Home Workout", "Travel Vlog",
];
const CHANNELS: &[&str] = &[
    "Daily Byte", "Kitchen Lab", "Trail Notes", "Night Owl Beats", "Code Cabin", "Wander Often",
];
const OWNERS: &[&str] = &[
    "sunny.days", "the_bakehouse", "urban.frames", "coastline_co", "pixel.garden",
];
const CAPTIONS: &[&str] = &[
    "Golden hour never misses",
    "New recipe drop, link in bio",
    "Weekend mode: on",
    "Behind the scenes of today's shoot",
    "Swipe for the before/after",
];

// (itag, quality, container, has_video, has_audio, kbps)
const FORMAT_LADDER: &[(u32, &str, &str, bool, bool, u64)] = &[
    (137, "1080p", "mp4", true, true, 4_500),
    (22, "720p", "mp4", true, true, 2_500),
    (135, "480p", "mp4", true, true, 1_100),
    (18, "360p", "mp4", true, true, 650),
    (140, "audio", "m4a", false, true, 128),
    (251, "audio-hq", "webm", false, true, 160),
];

pub const DEFAULT_VIDEO_FORMAT: &str = "720p";

/// How long a mocked download link claims to stay valid.
const TICKET_TTL_MINUTES: i64 = 30;

pub fn seeded_rng(id: &str) -> StdRng {
    let digest = Sha256::digest(id.as_bytes());
    let mut seed = [0u8; 32];
    seed.copy_from_slice(&digest);
    StdRng::from_seed(seed)
}

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, items: &'a [&'a str]) -> &'a str {
    items.choose(rng).copied().unwrap_or_default()
}

pub fn video_info<R: Rng + ?Sized>(video_id: &str, rng: &mut R) -> VideoInfo {
    let duration_seconds: u32 = rng.random_range(30..=3600);
    let title = format!("{} {}", pick(rng, ADJECTIVES), pick(rng, SUBJECTS));
    let author = pick(rng, CHANNELS).to_string();
    let view_count = rng.random_range(1_000..=50_000_000);

    let formats = FORMAT_LADDER
        .iter()
        .map(|&(itag, quality, container, has_video, has_audio, kbps)| {
            // narrower than the smallest bitrate step (128 -> 160 kbps)
            let jitter: f64 = rng.random_range(0.9..1.1);
            let bytes = (u64::from(duration_seconds) * kbps * 1000 / 8) as f64 * jitter;
            VideoFormat {
                itag,
                quality: quality.to_string(),
                container: container.to_string(),
                has_video,
                has_audio,
                filesize_bytes: bytes.round() as u64,
            }
        })
        .collect();

    VideoInfo {
        video_id: video_id.to_string(),
        title,
        author,
        duration_seconds,
        view_count,
        thumbnail: format!("https://i.ytimg.com/vi/{video_id}/hqdefault.jpg"),
        formats,
        notice: DEMO_NOTICE.to_string(),
    }
}

/// Find a format by quality label or itag, case-insensitively.
pub fn find_format<'a>(formats: &'a [VideoFormat], wanted: &str) -> Option<&'a VideoFormat> {
    let wanted = wanted.trim();
    formats.iter().find(|f| {
        f.quality.eq_ignore_ascii_case(wanted) || f.itag.to_string() == wanted
    })
}

pub fn instagram_info<R: Rng + ?Sized>(media: &InstagramMedia, rng: &mut R) -> InstagramInfo {
    let count = if media.kind.is_video() {
        1
    } else if rng.random_bool(0.4) {
        rng.random_range(2..=5)
    } else {
        1
    };

    let items = (0..count)
        .map(|index| {
            let video = media.kind.is_video() || rng.random_bool(0.2);
            let (width, height) = if video { (1080, 1920) } else { (1080, 1350) };
            let ext = if video { "mp4" } else { "jpg" };
            InstagramItem {
                index,
                kind: if video { "video" } else { "image" },
                url: format!(
                    "https://scontent.cdninstagram.com/v/{}_{index}.{ext}",
                    media.shortcode
                ),
                width,
                height,
                duration_seconds: video.then(|| rng.random_range(5..=90)),
            }
        })
        .collect();

    InstagramInfo {
        shortcode: media.shortcode.clone(),
        media_type: media.kind,
        owner: pick(rng, OWNERS).to_string(),
        caption: pick(rng, CAPTIONS).to_string(),
        like_count: rng.random_range(10..=2_000_000),
        comment_count: rng.random_range(0..=20_000),
        items,
        notice: DEMO_NOTICE.to_string(),
    }
}

pub fn download_ticket(id: &str, format: &str, extension: &str) -> DownloadTicket {
    DownloadTicket {
        id: id.to_string(),
        format: format.to_string(),
        filename: format!("{id}_{format}.{extension}"),
        status: "demo".to_string(),
        message: DEMO_NOTICE.to_string(),
        expires_at: Utc::now() + TimeDelta::minutes(TICKET_TTL_MINUTES),
    }
}

#[cfg(test)]
#[path = "mock_test.rs"]
mod tests;
