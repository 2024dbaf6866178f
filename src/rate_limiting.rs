// ABOUTME: In-memory per-client request rate limiter with a rolling window
// ABOUTME: Admits or rejects requests against a fixed ceiling per clientId
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkful

//! # Request Rate Limiting
//!
//! Tracks request counts per client identifier within a rolling window and
//! decides admit/reject. State lives in process memory for the process
//! lifetime; nothing persists across restarts (an accepted limitation - see
//! the non-goals in the project docs).
//!
//! The map is a [`DashMap`], so the compare-and-increment in [`RateLimiter::admit`]
//! runs while the shard lock for that client's key is held. Two concurrent
//! callers sharing one entry can never both read a stale count and slip past
//! the ceiling, which matters on a multi-threaded tokio runtime.
//!
//! Clients that present no identifying header all share the `"unknown"`
//! bucket - a coarse-grained fallback the handler accepts deliberately.

use chrono::{DateTime, Duration, Utc};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::debug;

/// Default rolling window length in seconds (1 hour)
pub const DEFAULT_WINDOW_SECS: i64 = 3600;

/// Default admitted requests per window per client
pub const DEFAULT_MAX_REQUESTS: u32 = 15;

/// Per-client request tally within the current window
#[derive(Debug, Clone)]
struct RateLimitEntry {
    /// Admitted requests in the current window
    count: u32,
    /// When the current window ends and the count resets
    reset_at: DateTime<Utc>,
}

/// Per-client request rate limiter
///
/// Owns its internal store rather than relying on module-level shared state,
/// so it can be injected into the request handler and tested in isolation.
#[derive(Debug)]
pub struct RateLimiter {
    entries: DashMap<String, RateLimitEntry>,
    window: Duration,
    max_requests: u32,
}

impl RateLimiter {
    /// Create a limiter with the given window length and ceiling
    #[must_use]
    pub fn new(window_secs: i64, max_requests: u32) -> Self {
        Self {
            entries: DashMap::new(),
            window: Duration::seconds(window_secs),
            max_requests,
        }
    }

    /// Decide whether a request from `client_id` is admitted right now
    #[must_use]
    pub fn admit(&self, client_id: &str) -> bool {
        self.admit_at(client_id, Utc::now())
    }

    /// Clock-injected variant of [`Self::admit`]
    ///
    /// On the first request from a never-seen client, or once `now` has
    /// passed the stored reset time, the entry restarts with count 1.
    /// At the ceiling the request is rejected without mutating the entry.
    #[must_use]
    pub fn admit_at(&self, client_id: &str, now: DateTime<Utc>) -> bool {
        self.sweep_expired(now);

        match self.entries.entry(client_id.to_owned()) {
            Entry::Occupied(mut occupied) => {
                let entry = occupied.get_mut();
                if now > entry.reset_at {
                    entry.count = 1;
                    entry.reset_at = now + self.window;
                    true
                } else if entry.count >= self.max_requests {
                    debug!(client_id, count = entry.count, "rate limit ceiling hit");
                    false
                } else {
                    entry.count += 1;
                    true
                }
            }
            Entry::Vacant(vacant) => {
                vacant.insert(RateLimitEntry {
                    count: 1,
                    reset_at: now + self.window,
                });
                true
            }
        }
    }

    /// Number of tracked clients (expired entries included until swept)
    #[must_use]
    pub fn tracked_clients(&self) -> usize {
        self.entries.len()
    }

    /// Drop entries whose window expired more than one full window ago.
    ///
    /// Keeps the map bounded by the set of clients active in the last two
    /// windows instead of growing for the process lifetime. Entries inside
    /// their grace window are left in place; `admit_at` resets them lazily.
    fn sweep_expired(&self, now: DateTime<Utc>) {
        let cutoff = now - self.window;
        self.entries.retain(|_, entry| entry.reset_at > cutoff);
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_SECS, DEFAULT_MAX_REQUESTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_request_is_admitted() {
        let limiter = RateLimiter::new(3600, 15);
        assert!(limiter.admit("203.0.113.7"));
        assert_eq!(limiter.tracked_clients(), 1);
    }

    #[test]
    fn test_ceiling_rejects_without_mutation() {
        let limiter = RateLimiter::new(3600, 3);
        let now = Utc::now();

        assert!(limiter.admit_at("client", now));
        assert!(limiter.admit_at("client", now));
        assert!(limiter.admit_at("client", now));
        // At the ceiling: rejected, and stays rejected for the whole window
        assert!(!limiter.admit_at("client", now));
        assert!(!limiter.admit_at("client", now + Duration::minutes(30)));
    }

    #[test]
    fn test_window_expiry_resets_count() {
        let limiter = RateLimiter::new(3600, 2);
        let now = Utc::now();

        assert!(limiter.admit_at("client", now));
        assert!(limiter.admit_at("client", now));
        assert!(!limiter.admit_at("client", now));

        // Just past the window: admitted again with a fresh count
        let later = now + Duration::seconds(3601);
        assert!(limiter.admit_at("client", later));
        assert!(limiter.admit_at("client", later));
        assert!(!limiter.admit_at("client", later));
    }

    #[test]
    fn test_clients_have_independent_buckets() {
        let limiter = RateLimiter::new(3600, 1);
        let now = Utc::now();

        assert!(limiter.admit_at("a", now));
        assert!(!limiter.admit_at("a", now));
        assert!(limiter.admit_at("b", now));
    }

    #[test]
    fn test_stale_entries_are_swept() {
        let limiter = RateLimiter::new(3600, 15);
        let now = Utc::now();

        assert!(limiter.admit_at("old-client", now));
        assert_eq!(limiter.tracked_clients(), 1);

        // Two windows later the old entry is long expired; any access sweeps it
        let much_later = now + Duration::seconds(2 * 3600 + 10);
        assert!(limiter.admit_at("new-client", much_later));
        assert_eq!(limiter.tracked_clients(), 1);
    }
}
