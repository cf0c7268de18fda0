use clap::Parser;
use std::time::Duration;

// CLI argument structure, every flag can also come from the environment
#[derive(Parser, Debug, Clone)]
#[command(name = "toolbox-edge")]
#[command(about = "Edge functions and calculators for the toolbox front-ends")]
pub struct Args {
    // Port to run the server on
    #[arg(short, long, env = "TOOLBOX_PORT", default_value_t = 8080)]
    pub port: u16,

    // Max requests per client IP per tool inside one window
    #[arg(long, env = "TOOLBOX_DAILY_LIMIT", default_value_t = 20)]
    pub daily_limit: usize,

    // Rate limit window in seconds
    #[arg(long, env = "TOOLBOX_WINDOW_SECS", default_value_t = 86_400)]
    pub window_secs: u64,

    // How often expired usage rows are dropped
    #[arg(long, env = "TOOLBOX_PRUNE_INTERVAL_SECS", default_value_t = 3_600)]
    pub prune_interval_secs: u64,

    // Fake processing time for the download endpoints
    #[arg(long, env = "TOOLBOX_SIMULATED_DELAY_MS", default_value_t = 1_500)]
    pub simulated_delay_ms: u64,

    // Where thumbnails are proxied from
    #[arg(long, env = "TOOLBOX_THUMBNAIL_BASE", default_value = "https://img.youtube.com")]
    pub thumbnail_base: String,

    // Thumbnail cache TTL in seconds
    #[arg(short, long, env = "TOOLBOX_CACHE_TTL_SECS", default_value_t = 3_600)]
    pub cache_ttl: u64,

    // Timeout for upstream fetches
    #[arg(long, env = "TOOLBOX_UPSTREAM_TIMEOUT_SECS", default_value_t = 10)]
    pub upstream_timeout_secs: u64,
}

impl Args {
    pub fn window(&self) -> Duration {
        Duration::from_secs(self.window_secs)
    }

    pub fn prune_interval(&self) -> Duration {
        Duration::from_secs(self.prune_interval_secs.max(1))
    }

    pub fn simulated_delay(&self) -> Duration {
        Duration::from_millis(self.simulated_delay_ms)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }
}
