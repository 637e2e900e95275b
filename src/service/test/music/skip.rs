use super::track;
use crate::service::music::MusicRegistry;

/// Tests skipping with tracks queued. Expected: the next track is promoted to
/// playing and returned.
#[test]
fn skip_promotes_next_track() {
    let registry = MusicRegistry::new();
    registry.enqueue(1, track("First"));
    registry.enqueue(1, track("Second"));

    let next = registry.skip(1);

    assert_eq!(next.unwrap().title, "Second");
    assert_eq!(registry.snapshot(1).playing.unwrap().title, "Second");
}

/// Tests skipping the last track. Expected: the queue goes idle and `skip`
/// returns nothing.
#[test]
fn skip_on_last_track_goes_idle() {
    let registry = MusicRegistry::new();
    registry.enqueue(1, track("Only"));

    assert!(registry.skip(1).is_none());
    assert!(registry.snapshot(1).playing.is_none());
}
