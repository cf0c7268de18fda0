use lazy_static::lazy_static;
use prometheus::{
    Counter, CounterVec, Gauge, Histogram, register_counter, register_counter_vec, register_gauge,
    register_histogram,
};

lazy_static! {
    pub static ref REQUEST_TOTAL: CounterVec = register_counter_vec!(
        "toolbox_requests_total",
        "Total number of requests per tool",
        &["tool"]
    )
    .unwrap();
    pub static ref RATE_LIMITED: CounterVec = register_counter_vec!(
        "toolbox_rate_limited_total",
        "Requests rejected by the usage limiter",
        &["tool"]
    )
    .unwrap();
    pub static ref USAGE_STORE_ERRORS: Counter = register_counter!(
        "toolbox_usage_store_errors_total",
        "Usage store failures (request allowed)"
    )
    .unwrap();
    pub static ref CACHE_HITS: Counter =
        register_counter!("toolbox_thumbnail_cache_hits_total", "Thumbnail cache hits").unwrap();
    pub static ref CACHE_MISSES: Counter =
        register_counter!("toolbox_thumbnail_cache_misses_total", "Thumbnail cache misses").unwrap();
    pub static ref THUMBNAIL_FETCH_LATENCY: Histogram = register_histogram!(
        "toolbox_thumbnail_fetch_seconds",
        "Upstream thumbnail fetch latency in seconds"
    )
    .unwrap();
    pub static ref CACHE_SIZE: Gauge =
        register_gauge!("toolbox_thumbnail_cache_size", "Current number of cached thumbnails").unwrap();
}
