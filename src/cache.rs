use axum::body::Bytes;
use dashmap::DashMap;
use sha2::{Digest, Sha256};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::metrics::CACHE_SIZE;

// Cached thumbnail with timestamp
#[derive(Clone)]
pub struct CacheEntry {
    pub body: Bytes,
    pub content_type: String,
    /// Quality actually served, after fallback.
    pub quality: &'static str,
    pub created_at: Instant,
}

// Create a cache key (hash of video id + requested quality)
pub fn make_cache_key(video_id: &str, quality: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(video_id);
    hasher.update(quality);
    format!("{:x}", hasher.finalize())
}

pub struct ThumbnailCache {
    entries: DashMap<String, CacheEntry>,
    ttl: Duration,
}

impl ThumbnailCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
        }
    }

    pub fn get(&self, key: &str) -> Option<CacheEntry> {
        let entry = self.entries.get(key)?;
        if entry.created_at.elapsed() < self.ttl {
            return Some(entry.clone());
        }
        drop(entry);
        self.entries.remove(key);
        CACHE_SIZE.set(self.entries.len() as f64);
        None
    }

    pub fn insert(&self, key: String, entry: CacheEntry) {
        if self.ttl.is_zero() {
            return;
        }
        self.entries.insert(key, entry);
        CACHE_SIZE.set(self.entries.len() as f64);
    }

    /// Remove expired entries, returning how many were dropped.
    pub fn sweep_expired(&self) -> usize {
        let before = self.entries.len();
        self.entries
            .retain(|_, entry| entry.created_at.elapsed() < self.ttl);
        CACHE_SIZE.set(self.entries.len() as f64);
        before.saturating_sub(self.entries.len())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

// Periodic sweep so one-off thumbnails don't stay in memory forever
pub async fn cache_sweeper(cache: Arc<ThumbnailCache>, every: Duration) {
    let mut interval = tokio::time::interval(every);
    loop {
        interval.tick().await;
        let removed = cache.sweep_expired();
        if removed > 0 {
            tracing::debug!(removed, remaining = cache.len(), "swept expired thumbnails");
        }
    }
}

#[cfg(test)]
#[path = "cache_test.rs"]
mod tests;
