use super::track;
use crate::service::music::MusicRegistry;

/// Tests stopping an active queue. Expected: playback and the queue are
/// cleared and the call reports that something was stopped.
#[test]
fn stop_clears_queue() {
    let registry = MusicRegistry::new();
    registry.enqueue(1, track("First"));
    registry.enqueue(1, track("Second"));

    assert!(registry.stop(1));

    let snapshot = registry.snapshot(1);
    assert!(snapshot.playing.is_none());
    assert!(snapshot.upcoming.is_empty());
}

/// Tests stopping an idle queue. Expected: the call is a no-op and reports
/// that nothing was playing.
#[test]
fn stop_on_idle_queue_reports_nothing() {
    let registry = MusicRegistry::new();

    assert!(!registry.stop(1));
}
