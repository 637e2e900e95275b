use chrono::Duration;
use serenity::all::Permissions;

use crate::{
    bot::command::CommandContext,
    error::AppError,
    model::guild_config::FeatureName,
    service::moderation::ModerationService,
    util::parse::{parse_duration, parse_user_mention},
};

const DEFAULT_MUTE_MINUTES: i64 = 10;

/// Issues a timed mute against a member.
///
/// Usage: `mute @member [duration] [reason]` where duration looks like
/// `10m`, `2h` or `1d`. Without a duration the mute lasts ten minutes.
pub async fn mute(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    if !ctx.require_feature(FeatureName::Mute).await? {
        return Ok(());
    }
    if !ctx.require_permissions(Permissions::MODERATE_MEMBERS).await? {
        return Ok(());
    }

    let Some(target) = ctx.args.first().and_then(|a| parse_user_mention(a)) else {
        ctx.reply("Usage: mute @member [duration] [reason]").await?;
        return Ok(());
    };

    let Some(guild_id) = ctx.msg.guild_id else {
        return Ok(());
    };

    let (duration, reason_from) = match ctx.args.get(1).and_then(|a| parse_duration(a)) {
        Some(duration) => (duration, 2),
        None => (Duration::minutes(DEFAULT_MUTE_MINUTES), 1),
    };

    let reason = match ctx.args.get(reason_from..) {
        Some(rest) if !rest.is_empty() => rest.join(" "),
        _ => "No reason provided".to_string(),
    };

    let expires_at = ModerationService::new(ctx.db, ctx.serenity.http.clone())
        .issue_timed_mute(guild_id.get(), target, duration, &reason)
        .await?;

    ctx.reply(format!(
        "Muted <@{}> until <t:{}>.",
        target,
        expires_at.timestamp()
    ))
    .await?;

    Ok(())
}
