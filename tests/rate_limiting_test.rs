// ABOUTME: Integration tests for the per-client rate limiter at production settings
// ABOUTME: Verifies the 15-per-hour ceiling, window reset, and the shared unknown bucket

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{Duration, Utc};
use forkful::rate_limiting::{RateLimiter, DEFAULT_MAX_REQUESTS, DEFAULT_WINDOW_SECS};

#[test]
fn test_production_ceiling_is_fifteen_per_hour() {
    let limiter = RateLimiter::new(DEFAULT_WINDOW_SECS, DEFAULT_MAX_REQUESTS);
    let now = Utc::now();

    for i in 0..15 {
        assert!(limiter.admit_at("203.0.113.7", now), "request {i} admitted");
    }

    // 16th and 17th requests inside the same window are rejected
    assert!(!limiter.admit_at("203.0.113.7", now));
    assert!(!limiter.admit_at("203.0.113.7", now + Duration::minutes(59)));
}

#[test]
fn test_window_rollover_restores_full_allowance() {
    let limiter = RateLimiter::new(DEFAULT_WINDOW_SECS, DEFAULT_MAX_REQUESTS);
    let now = Utc::now();

    for _ in 0..15 {
        assert!(limiter.admit_at("203.0.113.7", now));
    }
    assert!(!limiter.admit_at("203.0.113.7", now));

    let after_window = now + Duration::seconds(DEFAULT_WINDOW_SECS + 1);
    for i in 0..15 {
        assert!(
            limiter.admit_at("203.0.113.7", after_window),
            "request {i} after rollover"
        );
    }
    assert!(!limiter.admit_at("203.0.113.7", after_window));
}

#[test]
fn test_unidentified_clients_share_one_bucket() {
    let limiter = RateLimiter::new(DEFAULT_WINDOW_SECS, 3);
    let now = Utc::now();

    // Every request without identifying headers lands on "unknown"
    assert!(limiter.admit_at("unknown", now));
    assert!(limiter.admit_at("unknown", now));
    assert!(limiter.admit_at("unknown", now));
    assert!(!limiter.admit_at("unknown", now));

    // An identified client is unaffected by the shared bucket
    assert!(limiter.admit_at("203.0.113.7", now));
}

#[test]
fn test_rejections_do_not_extend_the_window() {
    let limiter = RateLimiter::new(DEFAULT_WINDOW_SECS, 1);
    let now = Utc::now();

    assert!(limiter.admit_at("203.0.113.7", now));

    // Hammering while limited must not push the reset time out
    for minutes in [10, 30, 59] {
        assert!(!limiter.admit_at("203.0.113.7", now + Duration::minutes(minutes)));
    }
    assert!(limiter.admit_at(
        "203.0.113.7",
        now + Duration::seconds(DEFAULT_WINDOW_SECS + 1)
    ));
}
