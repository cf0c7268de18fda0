use axum::{Json, extract::State, response::IntoResponse};
use std::sync::Arc;

use super::enforce_quota;
use crate::error::AppError;
use crate::extract::JsonBody;
use crate::links::instagram_media;
use crate::mock;
use crate::models::{InstagramDownloadRequest, UrlRequest};
use crate::rate_limit::ClientIp;
use crate::state::AppState;

const TOOL: &str = "igdl";

pub async fn igdl_info_handler(
    State(state): State<Arc<AppState>>,
    ClientIp(ip): ClientIp,
    JsonBody(payload): JsonBody<UrlRequest>,
) -> Result<impl IntoResponse, AppError> {
    let media = instagram_media(&payload.url).ok_or(AppError::InvalidUrl("Instagram"))?;
    let quota = enforce_quota(&state, TOOL, &ip)?;

    let info = mock::instagram_info(&media, &mut mock::seeded_rng(&media.shortcode));
    tracing::info!(tool = TOOL, %ip, shortcode = %media.shortcode, items = info.items.len(), "post info served");

    Ok((quota, Json(info)))
}

pub async fn igdl_download_handler(
    State(state): State<Arc<AppState>>,
    ClientIp(ip): ClientIp,
    JsonBody(payload): JsonBody<InstagramDownloadRequest>,
) -> Result<impl IntoResponse, AppError> {
    let media = instagram_media(&payload.url).ok_or(AppError::InvalidUrl("Instagram"))?;

    let info = mock::instagram_info(&media, &mut mock::seeded_rng(&media.shortcode));
    let index = payload.index.unwrap_or(0);
    let item = info.items.get(index).ok_or_else(|| {
        AppError::BadRequest(format!(
            "index {index} out of range, post has {} item(s)",
            info.items.len()
        ))
    })?;

    let quota = enforce_quota(&state, TOOL, &ip)?;

    tokio::time::sleep(state.simulated_delay).await;

    let extension = if item.kind == "video" { "mp4" } else { "jpg" };
    let ticket = mock::download_ticket(
        &format!("{}_{index}", media.shortcode),
        item.kind,
        extension,
    );
    tracing::info!(tool = TOOL, %ip, shortcode = %media.shortcode, index, "download ticket issued");

    Ok((quota, Json(ticket)))
}
