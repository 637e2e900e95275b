//! Per-guild music queue registry.
//!
//! Tracks what each guild asked to play. The registry is an explicit service
//! object created at startup and handed to the bot handler; there is no
//! process-wide singleton. Queue state only, no audio transport.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use crate::model::music::{QueueSnapshot, Track};

/// Result of enqueueing a track.
#[derive(Debug, Clone, PartialEq)]
pub enum Enqueued {
    /// The queue was idle; this track plays immediately.
    NowPlaying,
    /// Queued behind the current track at this 1-based position.
    Queued(usize),
}

#[derive(Default)]
struct GuildQueue {
    playing: Option<Track>,
    upcoming: VecDeque<Track>,
}

/// Registry of every guild's queue state.
pub struct MusicRegistry {
    queues: Mutex<HashMap<u64, GuildQueue>>,
}

impl MusicRegistry {
    pub fn new() -> Self {
        Self {
            queues: Mutex::new(HashMap::new()),
        }
    }

    /// Adds a track to the guild's queue.
    ///
    /// An idle queue starts playing immediately; otherwise the track is
    /// appended and its queue position reported.
    pub fn enqueue(&self, guild_id: u64, track: Track) -> Enqueued {
        let mut queues = self.queues.lock().expect("music registry mutex poisoned");
        let queue = queues.entry(guild_id).or_default();

        if queue.playing.is_none() {
            queue.playing = Some(track);
            return Enqueued::NowPlaying;
        }

        queue.upcoming.push_back(track);
        Enqueued::Queued(queue.upcoming.len())
    }

    /// Skips the current track.
    ///
    /// # Returns
    /// - `Some(Track)` - The track now playing
    /// - `None` - Queue is exhausted (or was idle)
    pub fn skip(&self, guild_id: u64) -> Option<Track> {
        let mut queues = self.queues.lock().expect("music registry mutex poisoned");
        let queue = queues.entry(guild_id).or_default();

        queue.playing = queue.upcoming.pop_front();
        queue.playing.clone()
    }

    /// Returns a point-in-time view of the guild's queue.
    pub fn snapshot(&self, guild_id: u64) -> QueueSnapshot {
        let queues = self.queues.lock().expect("music registry mutex poisoned");

        match queues.get(&guild_id) {
            Some(queue) => QueueSnapshot {
                playing: queue.playing.clone(),
                upcoming: queue.upcoming.iter().cloned().collect(),
            },
            None => QueueSnapshot::default(),
        }
    }

    /// Stops playback and clears the guild's queue.
    ///
    /// # Returns
    /// - `true` - Something was playing or queued
    /// - `false` - Queue was already idle
    pub fn stop(&self, guild_id: u64) -> bool {
        let mut queues = self.queues.lock().expect("music registry mutex poisoned");

        match queues.remove(&guild_id) {
            Some(queue) => queue.playing.is_some() || !queue.upcoming.is_empty(),
            None => false,
        }
    }
}

impl Default for MusicRegistry {
    fn default() -> Self {
        Self::new()
    }
}
