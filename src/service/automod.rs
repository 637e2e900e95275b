//! Auto-moderation decision logic.
//!
//! Everything here is deliberately pure or in-memory: the rate limiter, the
//! banned-word filter and the escalation decision all run without touching
//! Discord, so the message handler owns every external side effect.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};
use regex::RegexBuilder;

use crate::model::automod::AutomodPolicy;

/// Width of the rate limiter's sliding window.
const RATE_WINDOW_SECONDS: i64 = 5;
/// Messages allowed inside one window before throttling kicks in.
const RATE_MAX_MESSAGES: usize = 5;

/// Sliding-window message rate limiter, keyed by `(guild, author)`.
///
/// State lives purely in memory and resets on restart. The limiter is owned
/// by the automod service instance handed to the bot handler; there is no
/// global registry.
pub struct RateLimiter {
    buckets: Mutex<HashMap<(u64, u64), VecDeque<DateTime<Utc>>>>,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self {
            buckets: Mutex::new(HashMap::new()),
        }
    }

    /// Records one message and reports whether the author is over the limit.
    ///
    /// Prunes the member's window to the trailing five seconds, appends the
    /// new timestamp, and flags when more than five messages remain.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the message was sent in
    /// - `user_id` - Message author
    /// - `now` - Message timestamp (injected for testability)
    ///
    /// # Returns
    /// - `true` - Author exceeded the limit with this message
    /// - `false` - Message is within bounds
    pub fn record(&self, guild_id: u64, user_id: u64, now: DateTime<Utc>) -> bool {
        let mut buckets = self.buckets.lock().expect("rate limiter mutex poisoned");
        let window = buckets.entry((guild_id, user_id)).or_default();

        let cutoff = now - Duration::seconds(RATE_WINDOW_SECONDS);
        while window.front().is_some_and(|t| *t <= cutoff) {
            window.pop_front();
        }

        window.push_back(now);

        window.len() > RATE_MAX_MESSAGES
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

/// The outcome of a content violation after the warning count is known.
#[derive(Debug, Clone, PartialEq)]
pub enum Escalation {
    /// Threshold reached: issue a timed mute.
    Mute { duration_minutes: i32 },
    /// Below threshold: notify the member of their standing.
    Warn { current: u64, threshold: i32 },
}

/// Auto-moderation service holding the per-process rate limiter.
pub struct AutoModService {
    rate_limiter: RateLimiter,
}

impl AutoModService {
    pub fn new() -> Self {
        Self {
            rate_limiter: RateLimiter::new(),
        }
    }

    /// Runs the rate check for one message.
    ///
    /// See [`RateLimiter::record`].
    pub fn check_rate(&self, guild_id: u64, user_id: u64, now: DateTime<Utc>) -> bool {
        self.rate_limiter.record(guild_id, user_id, now)
    }
}

impl Default for AutoModService {
    fn default() -> Self {
        Self::new()
    }
}

/// Finds the first banned term matching the message content.
///
/// Matching is case-insensitive and whole-word: each stored term is wrapped
/// in word boundaries, so `class` does not match a ban on `ass`.
///
/// # Arguments
/// - `content` - The message content
/// - `banned_words` - Lowercased banned terms from the guild's policy
///
/// # Returns
/// - `Some(term)` - The first matching banned term
/// - `None` - No term matched
pub fn find_banned_word(content: &str, banned_words: &[String]) -> Option<String> {
    for term in banned_words {
        // An empty term would compile to a bare boundary pair matching
        // everything. Updates reject them; stored rows may predate that.
        if term.trim().is_empty() {
            continue;
        }

        let pattern = format!(r"\b{}\b", regex::escape(term));
        let Ok(re) = RegexBuilder::new(&pattern).case_insensitive(true).build() else {
            continue;
        };

        if re.is_match(content) {
            return Some(term.clone());
        }
    }

    None
}

/// Whether the author is exempt from the content filter.
///
/// Both the member whitelist and the role whitelist are consulted.
///
/// # Arguments
/// - `policy` - The guild's automod policy
/// - `user_id` - Message author's Discord ID
/// - `role_ids` - The author's role IDs
pub fn is_whitelisted(policy: &AutomodPolicy, user_id: &str, role_ids: &[String]) -> bool {
    if policy.whitelist_members.iter().any(|m| m == user_id) {
        return true;
    }

    role_ids
        .iter()
        .any(|role| policy.whitelist_roles.iter().any(|w| w == role))
}

/// Decides how a recorded warning escalates.
///
/// Called after the new warning has been recorded, so `warnings_in_window`
/// includes it. The threshold only trips when the policy allows muting; a
/// policy with muting disabled keeps warning indefinitely.
///
/// # Arguments
/// - `policy` - The guild's automod policy
/// - `warnings_in_window` - The member's warnings inside the expiry window
///
/// # Returns
/// - `Escalation::Mute` - Threshold reached and muting enabled
/// - `Escalation::Warn` - Below threshold (or muting disabled)
pub fn decide_escalation(policy: &AutomodPolicy, warnings_in_window: u64) -> Escalation {
    if policy.mute_on_violation && warnings_in_window >= policy.warnings_before_mute as u64 {
        return Escalation::Mute {
            duration_minutes: policy.mute_duration_minutes,
        };
    }

    Escalation::Warn {
        current: warnings_in_window,
        threshold: policy.warnings_before_mute,
    }
}
