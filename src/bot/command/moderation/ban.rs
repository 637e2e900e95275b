use serenity::all::{Permissions, UserId};

use crate::{
    bot::command::CommandContext,
    error::AppError,
    model::guild_config::FeatureName,
    service::moderation::ModerationService,
    util::parse::parse_user_mention,
};

/// Bans a member from the guild.
///
/// Usage: `ban @member [reason]`
pub async fn ban(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    if !ctx.require_feature(FeatureName::Moderation).await? {
        return Ok(());
    }
    if !ctx.require_permissions(Permissions::BAN_MEMBERS).await? {
        return Ok(());
    }

    let Some(target) = ctx.args.first().and_then(|a| parse_user_mention(a)) else {
        ctx.reply("Usage: ban @member [reason]").await?;
        return Ok(());
    };

    let Some(guild_id) = ctx.msg.guild_id else {
        return Ok(());
    };

    let reason = match ctx.args.get(1..) {
        Some(rest) if !rest.is_empty() => rest.join(" "),
        _ => "No reason provided".to_string(),
    };

    guild_id
        .ban_with_reason(&ctx.serenity.http, UserId::new(target), 0, &reason)
        .await?;

    ModerationService::new(ctx.db, ctx.serenity.http.clone())
        .send_mod_log(
            ctx.config,
            "Member banned",
            &format!("<@{}> banned: {}", target, reason),
        )
        .await;

    ctx.reply(format!("Banned <@{}>.", target)).await?;

    Ok(())
}
