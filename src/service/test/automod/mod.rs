use crate::model::automod::AutomodPolicy;

pub mod decide_escalation;
pub mod find_banned_word;
pub mod is_whitelisted;
pub mod rate_limiter;

fn policy() -> AutomodPolicy {
    AutomodPolicy {
        guild_id: "123456789".to_string(),
        enabled: true,
        banned_words: vec!["badword".to_string(), "slur".to_string()],
        warn_on_violation: true,
        mute_on_violation: true,
        warnings_before_mute: 3,
        warning_expiry_hours: 24,
        mute_duration_minutes: 10,
        delete_messages: true,
        whitelist_members: vec!["555".to_string()],
        whitelist_roles: vec!["777".to_string()],
    }
}
