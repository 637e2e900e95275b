use chrono::{Duration, TimeZone, Utc};

use crate::service::automod::RateLimiter;

/// Tests that five messages inside the window pass and the sixth trips the
/// limiter. Expected: `record` returns false five times, then true.
#[test]
fn sixth_message_in_window_trips_limit() {
    let limiter = RateLimiter::new();
    let start = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();

    for i in 0..5 {
        let now = start + Duration::milliseconds(i * 100);
        assert!(!limiter.record(1, 10, now));
    }

    assert!(limiter.record(1, 10, start + Duration::milliseconds(500)));
}

/// Tests that messages older than the window are pruned. Expected: a burst of
/// five followed by a sixth message six seconds later does not trip the limit.
#[test]
fn window_slides_past_old_messages() {
    let limiter = RateLimiter::new();
    let start = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();

    for i in 0..5 {
        assert!(!limiter.record(1, 10, start + Duration::milliseconds(i * 100)));
    }

    assert!(!limiter.record(1, 10, start + Duration::seconds(6)));
}

/// Tests that limiter buckets are keyed per guild and member. Expected: one
/// member's burst never affects another member or another guild.
#[test]
fn buckets_are_per_guild_and_member() {
    let limiter = RateLimiter::new();
    let start = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();

    for i in 0..6 {
        limiter.record(1, 10, start + Duration::milliseconds(i * 50));
    }

    assert!(!limiter.record(1, 11, start));
    assert!(!limiter.record(2, 10, start));
}
