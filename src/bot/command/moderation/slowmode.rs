use serenity::all::{EditChannel, Permissions};

use crate::{bot::command::CommandContext, error::AppError, model::guild_config::FeatureName};

/// Discord's maximum slowmode interval.
const MAX_SLOWMODE_SECONDS: u16 = 21600;

/// Sets the invoking channel's slowmode interval.
///
/// Usage: `slowmode <seconds>` with 0 disabling slowmode.
pub async fn slowmode(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    if !ctx.require_feature(FeatureName::Moderation).await? {
        return Ok(());
    }
    if !ctx.require_permissions(Permissions::MANAGE_CHANNELS).await? {
        return Ok(());
    }

    let Some(seconds) = ctx
        .args
        .first()
        .and_then(|a| a.parse::<u16>().ok())
        .filter(|n| *n <= MAX_SLOWMODE_SECONDS)
    else {
        ctx.reply(format!("Usage: slowmode <0-{}>", MAX_SLOWMODE_SECONDS))
            .await?;
        return Ok(());
    };

    ctx.msg
        .channel_id
        .edit(
            &ctx.serenity.http,
            EditChannel::new().rate_limit_per_user(seconds),
        )
        .await?;

    if seconds == 0 {
        ctx.reply("Slowmode disabled.").await?;
    } else {
        ctx.reply(format!("Slowmode set to {} seconds.", seconds))
            .await?;
    }

    Ok(())
}
