mod health;
mod igdl;
mod metrics;
mod thumbnail;
pub mod tools;
mod ytdl;

pub use health::health_handler;
pub use igdl::{igdl_download_handler, igdl_info_handler};
pub use metrics::metrics_handler;
pub use thumbnail::{thumbnail_handler, thumbnail_links_handler};
pub use ytdl::{ytdl_download_handler, ytdl_info_handler};

use crate::error::AppError;
use crate::metrics::REQUEST_TOTAL;
use crate::rate_limit::Decision;
use crate::state::AppState;

/// `x-ratelimit-*` headers for an admitted request.
pub(crate) type QuotaHeaders = [(&'static str, String); 2];

// Count the request and charge it against the caller's daily quota
pub(crate) fn enforce_quota(
    state: &AppState,
    tool: &'static str,
    ip: &str,
) -> Result<QuotaHeaders, AppError> {
    REQUEST_TOTAL.with_label_values(&[tool]).inc();

    match state.limiter.check(tool, ip) {
        Decision::Allowed { limit, remaining } => Ok([
            ("x-ratelimit-limit", limit.to_string()),
            ("x-ratelimit-remaining", remaining.to_string()),
        ]),
        Decision::Denied { limit, reset_at } => Err(AppError::RateLimited { limit, reset_at }),
    }
}
