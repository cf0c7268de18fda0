use axum::{Json, extract::State, response::IntoResponse};
use std::sync::Arc;

use super::enforce_quota;
use crate::error::AppError;
use crate::extract::JsonBody;
use crate::links::youtube_video_id;
use crate::mock::{self, DEFAULT_VIDEO_FORMAT};
use crate::models::{UrlRequest, YoutubeDownloadRequest};
use crate::rate_limit::ClientIp;
use crate::state::AppState;

const TOOL: &str = "ytdl";

pub async fn ytdl_info_handler(
    State(state): State<Arc<AppState>>,
    ClientIp(ip): ClientIp,
    JsonBody(payload): JsonBody<UrlRequest>,
) -> Result<impl IntoResponse, AppError> {
    let video_id = youtube_video_id(&payload.url).ok_or(AppError::InvalidUrl("YouTube"))?;
    let quota = enforce_quota(&state, TOOL, &ip)?;

    let info = mock::video_info(&video_id, &mut mock::seeded_rng(&video_id));
    tracing::info!(tool = TOOL, %ip, %video_id, "video info served");

    Ok((quota, Json(info)))
}

pub async fn ytdl_download_handler(
    State(state): State<Arc<AppState>>,
    ClientIp(ip): ClientIp,
    JsonBody(payload): JsonBody<YoutubeDownloadRequest>,
) -> Result<impl IntoResponse, AppError> {
    let video_id = youtube_video_id(&payload.url).ok_or(AppError::InvalidUrl("YouTube"))?;

    let info = mock::video_info(&video_id, &mut mock::seeded_rng(&video_id));
    let wanted = payload.format.as_deref().unwrap_or(DEFAULT_VIDEO_FORMAT);
    let format = mock::find_format(&info.formats, wanted)
        .ok_or_else(|| AppError::BadRequest(format!("unknown format: {wanted}")))?;

    let quota = enforce_quota(&state, TOOL, &ip)?;

    // stands in for the real download work
    tokio::time::sleep(state.simulated_delay).await;

    let ticket = mock::download_ticket(&video_id, &format.quality, &format.container);
    tracing::info!(tool = TOOL, %ip, %video_id, format = %format.quality, "download ticket issued");

    Ok((quota, Json(ticket)))
}
