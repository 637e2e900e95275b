use serenity::all::Permissions;

use crate::{
    bot::command::CommandContext,
    error::AppError,
    model::guild_config::FeatureName,
    service::moderation::ModerationService,
    util::parse::parse_user_mention,
};

/// Lifts a member's mute.
///
/// Usage: `unmute @member`
pub async fn unmute(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    if !ctx.require_feature(FeatureName::Mute).await? {
        return Ok(());
    }
    if !ctx.require_permissions(Permissions::MODERATE_MEMBERS).await? {
        return Ok(());
    }

    let Some(target) = ctx.args.first().and_then(|a| parse_user_mention(a)) else {
        ctx.reply("Usage: unmute @member").await?;
        return Ok(());
    };

    let Some(guild_id) = ctx.msg.guild_id else {
        return Ok(());
    };

    ModerationService::new(ctx.db, ctx.serenity.http.clone())
        .lift_mute(guild_id.get(), target)
        .await?;

    ctx.reply(format!("Unmuted <@{}>.", target)).await?;

    Ok(())
}
