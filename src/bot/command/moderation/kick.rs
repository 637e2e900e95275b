use serenity::all::{Permissions, UserId};

use crate::{
    bot::command::CommandContext,
    error::AppError,
    model::guild_config::FeatureName,
    service::moderation::ModerationService,
    util::parse::parse_user_mention,
};

/// Kicks a member from the guild.
///
/// Usage: `kick @member [reason]`
pub async fn kick(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    if !ctx.require_feature(FeatureName::Moderation).await? {
        return Ok(());
    }
    if !ctx.require_permissions(Permissions::KICK_MEMBERS).await? {
        return Ok(());
    }

    let Some(target) = ctx.args.first().and_then(|a| parse_user_mention(a)) else {
        ctx.reply("Usage: kick @member [reason]").await?;
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
        .kick_with_reason(&ctx.serenity.http, UserId::new(target), &reason)
        .await?;

    ModerationService::new(ctx.db, ctx.serenity.http.clone())
        .send_mod_log(
            ctx.config,
            "Member kicked",
            &format!("<@{}> kicked: {}", target, reason),
        )
        .await;

    ctx.reply(format!("Kicked <@{}>.", target)).await?;

    Ok(())
}
