use super::track;
use crate::service::music::{Enqueued, MusicRegistry};

/// Tests enqueueing into an idle queue. Expected: the track starts playing
/// immediately and appears as `playing` in the snapshot.
#[test]
fn idle_queue_plays_immediately() {
    let registry = MusicRegistry::new();

    let result = registry.enqueue(1, track("First"));

    assert_eq!(result, Enqueued::NowPlaying);

    let snapshot = registry.snapshot(1);
    assert_eq!(snapshot.playing.unwrap().title, "First");
    assert!(snapshot.upcoming.is_empty());
}

/// Tests enqueueing behind a playing track. Expected: later tracks queue up
/// with 1-based positions in arrival order.
#[test]
fn busy_queue_reports_position() {
    let registry = MusicRegistry::new();

    registry.enqueue(1, track("First"));

    assert_eq!(registry.enqueue(1, track("Second")), Enqueued::Queued(1));
    assert_eq!(registry.enqueue(1, track("Third")), Enqueued::Queued(2));

    let snapshot = registry.snapshot(1);
    assert_eq!(snapshot.upcoming.len(), 2);
    assert_eq!(snapshot.upcoming[0].title, "Second");
}

/// Tests queue isolation. Expected: each guild has its own queue state.
#[test]
fn queues_are_per_guild() {
    let registry = MusicRegistry::new();

    registry.enqueue(1, track("First"));

    assert_eq!(registry.enqueue(2, track("Other")), Enqueued::NowPlaying);
}
