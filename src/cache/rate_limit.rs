use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};

/// Minimum spacing between calls to the same named external API.
///
/// Owned by a session, never shared process-wide. Callers pass `now` so the
/// limiter stays deterministic.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    min_interval: Duration,
    last_call: BTreeMap<String, DateTime<Utc>>,
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(Duration::milliseconds(1_000))
    }
}

impl RateLimiter {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_call: BTreeMap::new(),
        }
    }

    /// Returns true and records the call when `api` may be called at `now`.
    pub fn check(&mut self, api: &str, now: DateTime<Utc>) -> bool {
        if let Some(last) = self.last_call.get(api) {
            if now.signed_duration_since(*last) < self.min_interval {
                return false;
            }
        }
        self.last_call.insert(api.to_string(), now);
        true
    }

    pub fn last_call(&self, api: &str) -> Option<DateTime<Utc>> {
        self.last_call.get(api).copied()
    }
}
