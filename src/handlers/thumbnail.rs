use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use super::enforce_quota;
use crate::cache::make_cache_key;
use crate::error::AppError;
use crate::extract::QueryParams;
use crate::links::youtube_video_id;
use crate::metrics::{CACHE_HITS, CACHE_MISSES};
use crate::models::{ThumbnailQuery, UrlRequest};
use crate::rate_limit::ClientIp;
use crate::state::AppState;
use crate::thumbnail::{self, QUALITIES};

const TOOL: &str = "thumbnail";

pub async fn thumbnail_handler(
    State(state): State<Arc<AppState>>,
    ClientIp(ip): ClientIp,
    QueryParams(query): QueryParams<ThumbnailQuery>,
) -> Result<Response, AppError> {
    let video_id = youtube_video_id(&query.url).ok_or(AppError::InvalidUrl("YouTube"))?;
    let start = match query.quality.as_deref() {
        None => QUALITIES[0],
        Some(name) => thumbnail::parse_quality(name)
            .ok_or_else(|| AppError::BadRequest(format!("unknown quality: {name}")))?,
    };

    let quota = enforce_quota(&state, TOOL, &ip)?;

    let key = make_cache_key(&video_id, start);
    let entry = match state.thumbnails.get(&key) {
        Some(hit) => {
            CACHE_HITS.inc();
            hit
        }
        None => {
            CACHE_MISSES.inc();
            let fetched =
                thumbnail::fetch_with_fallback(&state.client, &state.thumbnail_base, &video_id, start)
                    .await?;
            state.thumbnails.insert(key, fetched.clone());
            fetched
        }
    };
    tracing::info!(tool = TOOL, %ip, %video_id, quality = entry.quality, "thumbnail served");

    let headers = [
        ("content-type", entry.content_type),
        ("cache-control", "public, max-age=86400".to_string()),
        ("x-thumbnail-quality", entry.quality.to_string()),
    ];
    Ok((quota, headers, entry.body).into_response())
}

// Lists every quality's URL; no upstream call, no quota
pub async fn thumbnail_links_handler(
    State(state): State<Arc<AppState>>,
    QueryParams(query): QueryParams<UrlRequest>,
) -> Result<impl IntoResponse, AppError> {
    let video_id = youtube_video_id(&query.url).ok_or(AppError::InvalidUrl("YouTube"))?;
    Ok(Json(thumbnail::links(&state.thumbnail_base, &video_id)))
}
