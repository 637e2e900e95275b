//! Message pipeline: rate throttling, banned-word filtering, then command
//! dispatch.
//!
//! Every step that touches Discord (deletes, notices) is best-effort; the
//! stored moderation state is the source of truth.

use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;
use serenity::all::{Context, Message};
use std::sync::Arc;
use std::time::Instant;

use crate::{
    bot::command::{self, CommandContext},
    data::{
        automod_config::AutomodConfigRepository, guild_config::GuildConfigRepository,
        violation::ViolationRepository, warning::WarningRepository,
    },
    error::AppError,
    model::{automod::AutomodPolicy, guild_config::FeatureName},
    service::{
        automod::{self, AutoModService, Escalation},
        moderation::ModerationService,
        music::MusicRegistry,
    },
};

const VIOLATION_REASON: &str = "Banned word";

/// Handles message creation: automod checks first, then command dispatch.
pub async fn handle_message(
    db: &DatabaseConnection,
    automod: &AutoModService,
    music: &Arc<MusicRegistry>,
    started_at: Instant,
    ctx: Context,
    msg: Message,
) {
    if msg.author.bot {
        return;
    }

    let Some(guild_id) = msg.guild_id else {
        return;
    };

    let config = match GuildConfigRepository::new(db)
        .get_or_create(&guild_id.to_string())
        .await
    {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load config for guild {}: {}", guild_id, e);
            return;
        }
    };

    let policy = match AutomodConfigRepository::new(db)
        .get_or_create(&guild_id.to_string())
        .await
    {
        Ok(policy) => policy,
        Err(e) => {
            tracing::error!("Failed to load automod policy for {}: {}", guild_id, e);
            return;
        }
    };

    let gates = automod_gates(&config, &policy);

    if gates.rate_check && automod.check_rate(guild_id.get(), msg.author.id.get(), Utc::now()) {
        throttle(&ctx, &msg).await;
        return;
    }

    if gates.content_filter
        && !author_is_whitelisted(&policy, &msg)
        && automod::find_banned_word(&msg.content, &policy.banned_words).is_some()
    {
        if let Err(e) = punish_violation(db, &ctx, &msg, &policy).await {
            tracing::error!("Failed to process violation in {}: {}", guild_id, e);
        }
        return;
    }

    let Some(rest) = msg.content.strip_prefix(&config.prefix) else {
        return;
    };

    let tokens: Vec<&str> = rest.split_whitespace().collect();
    let Some((first, args)) = tokens.split_first() else {
        return;
    };

    command::dispatch(
        CommandContext {
            db,
            serenity: &ctx,
            msg: &msg,
            args,
            config: &config,
            music,
            started_at,
        },
        first,
    )
    .await;
}

/// Which automod stages run for a message.
struct AutomodGates {
    rate_check: bool,
    content_filter: bool,
}

/// The guild's automod feature flag governs only the rate limiter. The
/// content filter follows `automod_config.enabled` alone, so word filtering
/// enabled from the dashboard works without the flag.
fn automod_gates(config: &entity::guild_config::Model, policy: &AutomodPolicy) -> AutomodGates {
    AutomodGates {
        rate_check: FeatureName::Automod.is_enabled(config),
        content_filter: policy.enabled,
    }
}

fn author_is_whitelisted(policy: &AutomodPolicy, msg: &Message) -> bool {
    let role_ids: Vec<String> = msg
        .member
        .as_ref()
        .map(|m| m.roles.iter().map(|r| r.to_string()).collect())
        .unwrap_or_default();

    automod::is_whitelisted(policy, &msg.author.id.to_string(), &role_ids)
}

/// How long the slow-down notice stays up before it is deleted.
const SLOWDOWN_NOTICE_SECONDS: u64 = 3;

/// Deletes a rate-limited message and posts a transient notice.
///
/// The notice itself is deleted after a few seconds so throttling does not
/// leave its own clutter behind.
async fn throttle(ctx: &Context, msg: &Message) {
    if let Err(e) = msg.delete(&ctx.http).await {
        tracing::debug!("Failed to delete rate-limited message: {}", e);
    }

    let notice = format!("<@{}>, slow down!", msg.author.id);
    match msg.channel_id.say(&ctx.http, notice).await {
        Ok(notice_msg) => {
            let http = ctx.http.clone();
            tokio::spawn(async move {
                tokio::time::sleep(std::time::Duration::from_secs(SLOWDOWN_NOTICE_SECONDS)).await;
                if let Err(e) = notice_msg.delete(&http).await {
                    tracing::debug!("Failed to delete slow-down notice: {}", e);
                }
            });
        }
        Err(e) => {
            tracing::debug!("Failed to send slow-down notice: {}", e);
        }
    }
}

/// Processes a banned-word hit: delete, record, warn, escalate.
async fn punish_violation(
    db: &DatabaseConnection,
    ctx: &Context,
    msg: &Message,
    policy: &AutomodPolicy,
) -> Result<(), AppError> {
    let guild_id = msg.guild_id.map(|g| g.to_string()).unwrap_or_default();
    let user_id = msg.author.id.to_string();

    if policy.delete_messages {
        if let Err(e) = msg.delete(&ctx.http).await {
            tracing::debug!("Failed to delete violating message: {}", e);
        }
    }

    ViolationRepository::new(db)
        .create(&guild_id, &user_id, VIOLATION_REASON, &msg.content)
        .await?;

    if !policy.warn_on_violation {
        return Ok(());
    }

    WarningRepository::new(db)
        .create(&guild_id, &user_id, VIOLATION_REASON)
        .await?;

    let warnings = WarningRepository::new(db)
        .count_recent(&guild_id, &user_id, policy.warning_expiry_hours)
        .await?;

    match automod::decide_escalation(policy, warnings) {
        Escalation::Mute { duration_minutes } => {
            ModerationService::new(db, ctx.http.clone())
                .issue_timed_mute(
                    msg.guild_id.map(|g| g.get()).unwrap_or_default(),
                    msg.author.id.get(),
                    Duration::minutes(duration_minutes as i64),
                    "Repeated banned-word violations",
                )
                .await?;

            let notice = format!(
                "<@{}> has been muted for {} minutes after repeated violations.",
                msg.author.id, duration_minutes
            );
            if let Err(e) = msg.channel_id.say(&ctx.http, notice).await {
                tracing::debug!("Failed to send mute notice: {}", e);
            }
        }
        Escalation::Warn { current, threshold } => {
            let notice = format!(
                "<@{}>, that word is not allowed here. Warning {}/{}.",
                msg.author.id, current, threshold
            );
            if let Err(e) = msg.channel_id.say(&ctx.http, notice).await {
                tracing::debug!("Failed to send warning notice: {}", e);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    fn config(feature_automod: bool) -> entity::guild_config::Model {
        entity::guild_config::Model {
            id: 1,
            guild_id: "123456789".to_string(),
            prefix: ",".to_string(),
            error_logging: true,
            status_message: "Watching over the server".to_string(),
            mod_log_channel_id: None,
            muted_role_id: None,
            ticket_category_id: None,
            staff_role_id: None,
            ticket_count: 0,
            feature_moderation: true,
            feature_automod,
            feature_economy: true,
            feature_music: true,
            feature_clear: true,
            feature_mute: true,
            feature_lockdown: true,
            feature_invite: true,
            feature_ping: true,
            feature_info: true,
        }
    }

    fn policy(enabled: bool) -> AutomodPolicy {
        AutomodPolicy {
            guild_id: "123456789".to_string(),
            enabled,
            banned_words: vec!["badword".to_string()],
            warn_on_violation: true,
            mute_on_violation: true,
            warnings_before_mute: 3,
            warning_expiry_hours: 24,
            mute_duration_minutes: 10,
            delete_messages: true,
            whitelist_roles: vec![],
            whitelist_members: vec![],
        }
    }

    /// Tests that an enabled word-filter policy applies with the guild's
    /// automod feature flag off, which is its default state.
    ///
    /// Expected: content filter runs, rate limiter does not
    #[test]
    fn content_filter_runs_without_the_feature_flag() {
        let gates = automod_gates(&config(false), &policy(true));

        assert!(!gates.rate_check);
        assert!(gates.content_filter);
    }

    /// Tests that the feature flag enables only the rate limiter.
    ///
    /// Expected: rate limiter runs, content filter stays off
    #[test]
    fn feature_flag_gates_only_the_rate_limiter() {
        let gates = automod_gates(&config(true), &policy(false));

        assert!(gates.rate_check);
        assert!(!gates.content_filter);
    }
}
