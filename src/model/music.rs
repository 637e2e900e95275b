//! Music queue domain types.
//!
//! Queue state only. The bot tracks what each guild asked to play; the actual
//! voice transport is an external concern.

/// One queued track request.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    /// What the requester asked for (search term or URL).
    pub title: String,
    /// Discord ID of the member who queued it.
    pub requested_by: u64,
}

/// Point-in-time view of a guild's queue.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueueSnapshot {
    /// Track currently at the front, if any.
    pub playing: Option<Track>,
    /// Remaining tracks in queue order.
    pub upcoming: Vec<Track>,
}
