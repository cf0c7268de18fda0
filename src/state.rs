use std::sync::Arc;
use std::time::Duration;

use crate::cache::ThumbnailCache;
use crate::config::Args;
use crate::rate_limit::{MemoryUsageStore, UsageLimiter};

// app's shared state
pub struct AppState {
    pub client: reqwest::Client,
    pub limiter: UsageLimiter,
    pub thumbnails: Arc<ThumbnailCache>,
    pub thumbnail_base: String,
    pub simulated_delay: Duration, // fake work time on download endpoints
}

impl AppState {
    pub fn from_args(args: &Args) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(args.upstream_timeout())
            .user_agent(concat!("toolbox-edge/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(args, client))
    }

    pub fn with_client(args: &Args, client: reqwest::Client) -> Self {
        let store = Arc::new(MemoryUsageStore::new());
        Self {
            client,
            limiter: UsageLimiter::new(store, args.daily_limit, args.window()),
            thumbnails: Arc::new(ThumbnailCache::new(args.cache_ttl())),
            thumbnail_base: args.thumbnail_base.clone(),
            simulated_delay: args.simulated_delay(),
        }
    }
}
