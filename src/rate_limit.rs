//! Per-tool, per-IP usage counting for the edge functions.
//!
//! Every admitted request becomes one usage row `(tool, ip, timestamp)`.
//! A request is denied when the client already has `limit` rows for that
//! tool inside the sliding window. Store failures never block a request.

use std::collections::VecDeque;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::{HeaderMap, request::Parts};
use chrono::{DateTime, TimeDelta, Utc};
use dashmap::DashMap;

use crate::metrics::{RATE_LIMITED, USAGE_STORE_ERRORS};

// Usage row - one per admitted request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageRecord {
    pub tool: String,
    pub ip: String,
    pub at: DateTime<Utc>,
}

#[derive(Debug, thiserror::Error)]
pub enum UsageStoreError {
    #[error("usage store unavailable: {0}")]
    Unavailable(String),
}

// Result of a combined count-and-record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// Row recorded; `used` includes it.
    Admitted { used: usize },
    /// Window already full; nothing recorded.
    Full { oldest: Option<DateTime<Utc>> },
}

pub trait UsageStore: Send + Sync {
    /// Number of rows for `(tool, ip)` newer than `since`, plus the oldest of them.
    fn count_since(
        &self,
        tool: &str,
        ip: &str,
        since: DateTime<Utc>,
    ) -> Result<(usize, Option<DateTime<Utc>>), UsageStoreError>;

    fn record(&self, record: UsageRecord) -> Result<(), UsageStoreError>;

    /// Drop rows at or before `cutoff`, returning how many went away.
    fn prune_before(&self, cutoff: DateTime<Utc>) -> usize;

    /// Total rows currently held.
    fn len(&self) -> usize;

    /// Count then record. Stores that can do this atomically should override it.
    fn admit(
        &self,
        record: UsageRecord,
        since: DateTime<Utc>,
        limit: usize,
    ) -> Result<Admission, UsageStoreError> {
        let (used, oldest) = self.count_since(&record.tool, &record.ip, since)?;
        if used >= limit {
            return Ok(Admission::Full { oldest });
        }
        self.record(record)?;
        Ok(Admission::Admitted { used: used + 1 })
    }
}

// In-memory usage table keyed by (tool, ip), timestamps oldest first
#[derive(Default)]
pub struct MemoryUsageStore {
    rows: DashMap<(String, String), VecDeque<DateTime<Utc>>>,
}

impl MemoryUsageStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn drop_expired(rows: &mut VecDeque<DateTime<Utc>>, cutoff: DateTime<Utc>) -> usize {
    let mut removed = 0;
    while rows.front().is_some_and(|at| *at <= cutoff) {
        rows.pop_front();
        removed += 1;
    }
    removed
}

impl UsageStore for MemoryUsageStore {
    fn count_since(
        &self,
        tool: &str,
        ip: &str,
        since: DateTime<Utc>,
    ) -> Result<(usize, Option<DateTime<Utc>>), UsageStoreError> {
        let key = (tool.to_string(), ip.to_string());
        let Some(rows) = self.rows.get(&key) else {
            return Ok((0, None));
        };
        let mut live = rows.iter().filter(|at| **at > since);
        let oldest = live.next().copied();
        let count = oldest.map_or(0, |_| 1 + live.count());
        Ok((count, oldest))
    }

    fn record(&self, record: UsageRecord) -> Result<(), UsageStoreError> {
        self.rows
            .entry((record.tool, record.ip))
            .or_default()
            .push_back(record.at);
        Ok(())
    }

    fn prune_before(&self, cutoff: DateTime<Utc>) -> usize {
        let mut removed = 0;
        for mut entry in self.rows.iter_mut() {
            removed += drop_expired(entry.value_mut(), cutoff);
        }
        self.rows.retain(|_, rows| !rows.is_empty());
        removed
    }

    fn len(&self) -> usize {
        self.rows.iter().map(|entry| entry.value().len()).sum()
    }

    // Holds the entry guard across count and record
    fn admit(
        &self,
        record: UsageRecord,
        since: DateTime<Utc>,
        limit: usize,
    ) -> Result<Admission, UsageStoreError> {
        let mut rows = self.rows.entry((record.tool, record.ip)).or_default();
        drop_expired(&mut rows, since);

        if rows.len() >= limit {
            return Ok(Admission::Full {
                oldest: rows.front().copied(),
            });
        }
        rows.push_back(record.at);
        Ok(Admission::Admitted { used: rows.len() })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allowed { limit: usize, remaining: usize },
    Denied { limit: usize, reset_at: DateTime<Utc> },
}

#[derive(Clone)]
pub struct UsageLimiter {
    store: Arc<dyn UsageStore>,
    limit: usize,
    window: TimeDelta,
}

impl UsageLimiter {
    pub fn new(store: Arc<dyn UsageStore>, limit: usize, window: Duration) -> Self {
        Self {
            store,
            limit,
            window: TimeDelta::from_std(window).unwrap_or(TimeDelta::days(1)),
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn store(&self) -> Arc<dyn UsageStore> {
        Arc::clone(&self.store)
    }

    pub fn check(&self, tool: &str, ip: &str) -> Decision {
        self.check_at(tool, ip, Utc::now())
    }

    fn check_at(&self, tool: &str, ip: &str, now: DateTime<Utc>) -> Decision {
        let record = UsageRecord {
            tool: tool.to_string(),
            ip: ip.to_string(),
            at: now,
        };

        match self.store.admit(record, now - self.window, self.limit) {
            Ok(Admission::Admitted { used }) => Decision::Allowed {
                limit: self.limit,
                remaining: self.limit.saturating_sub(used),
            },
            Ok(Admission::Full { oldest }) => {
                RATE_LIMITED.with_label_values(&[tool]).inc();
                tracing::info!(tool, ip, limit = self.limit, "rate limit reached");
                Decision::Denied {
                    limit: self.limit,
                    reset_at: oldest.unwrap_or(now) + self.window,
                }
            }
            Err(e) => {
                // allow on error
                USAGE_STORE_ERRORS.inc();
                tracing::warn!(tool, ip, error = %e, "usage store failed, allowing request");
                Decision::Allowed {
                    limit: self.limit,
                    remaining: self.limit,
                }
            }
        }
    }
}

/// Resolve the caller's IP: `x-real-ip`, then the first `x-forwarded-for`
/// entry, then the socket peer.
pub fn client_ip(headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
    let from_header = |name: &str| {
        headers
            .get(name)
            .and_then(|h| h.to_str().ok())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    from_header("x-real-ip")
        .or_else(|| {
            headers
                .get("x-forwarded-for")
                .and_then(|h| h.to_str().ok())
                .and_then(|s| s.split(',').map(str::trim).find(|ip| !ip.is_empty()))
                .map(str::to_string)
        })
        .or_else(|| peer.map(|addr| addr.ip().to_string()))
        .unwrap_or_else(|| "unknown".to_string())
}

// Extractor wrapper around `client_ip`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientIp(pub String);

impl<S: Send + Sync> FromRequestParts<S> for ClientIp {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ci| ci.0);
        Ok(ClientIp(client_ip(&parts.headers, peer)))
    }
}

// Background pruner - drops rows that fell out of the window
pub async fn usage_pruner(store: Arc<dyn UsageStore>, window: Duration, every: Duration) {
    let window = TimeDelta::from_std(window).unwrap_or(TimeDelta::days(1));
    let mut interval = tokio::time::interval(every);

    tracing::info!(interval = ?every, "usage pruner started");

    loop {
        interval.tick().await;
        let removed = store.prune_before(Utc::now() - window);
        if removed > 0 {
            tracing::debug!(removed, remaining = store.len(), "pruned expired usage rows");
        }
    }
}

#[cfg(test)]
#[path = "rate_limit_test.rs"]
mod tests;
