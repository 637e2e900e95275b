use serenity::all::{PermissionOverwriteType, Permissions, RoleId};

use crate::{bot::command::CommandContext, error::AppError, model::guild_config::FeatureName};

/// Removes the lockdown overwrite from the invoking channel.
///
/// Usage: `unlock`
pub async fn unlock(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    if !ctx.require_feature(FeatureName::Lockdown).await? {
        return Ok(());
    }
    if !ctx.require_permissions(Permissions::MANAGE_CHANNELS).await? {
        return Ok(());
    }

    let Some(guild_id) = ctx.msg.guild_id else {
        return Ok(());
    };

    ctx.msg
        .channel_id
        .delete_permission(
            &ctx.serenity.http,
            PermissionOverwriteType::Role(RoleId::new(guild_id.get())),
        )
        .await?;

    ctx.reply("Channel unlocked.").await?;

    Ok(())
}
