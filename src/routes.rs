use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{self, tools};
use crate::state::AppState;

pub fn app(state: Arc<AppState>) -> Router {
    let tool_routes = Router::new()
        .route("/age", post(tools::age_handler))
        .route("/bmi", post(tools::bmi_handler))
        .route("/color", post(tools::color_handler))
        .route("/emi", post(tools::emi_handler))
        .route("/hash", post(tools::hash_handler))
        .route("/percentage", post(tools::percentage_handler))
        .route("/password", post(tools::password_handler))
        .route("/text/stats", post(tools::text_stats_handler))
        .route("/text/case", post(tools::text_case_handler))
        .route("/units", post(tools::units_handler));

    Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/metrics", get(handlers::metrics_handler))
        .route("/ytdl/info", post(handlers::ytdl_info_handler))
        .route("/ytdl/download", post(handlers::ytdl_download_handler))
        .route("/igdl/info", post(handlers::igdl_info_handler))
        .route("/igdl/download", post(handlers::igdl_download_handler))
        .route("/thumbnail", get(handlers::thumbnail_handler))
        .route("/thumbnail/urls", get(handlers::thumbnail_links_handler))
        .nest("/tools", tool_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
