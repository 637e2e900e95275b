use serenity::all::{PermissionOverwrite, PermissionOverwriteType, Permissions, RoleId};

use crate::{bot::command::CommandContext, error::AppError, model::guild_config::FeatureName};

/// Locks the invoking channel by denying @everyone message sends.
///
/// Usage: `lockdown`
pub async fn lockdown(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    if !ctx.require_feature(FeatureName::Lockdown).await? {
        return Ok(());
    }
    if !ctx.require_permissions(Permissions::MANAGE_CHANNELS).await? {
        return Ok(());
    }

    let Some(guild_id) = ctx.msg.guild_id else {
        return Ok(());
    };

    // The @everyone role shares the guild's ID.
    let overwrite = PermissionOverwrite {
        allow: Permissions::empty(),
        deny: Permissions::SEND_MESSAGES,
        kind: PermissionOverwriteType::Role(RoleId::new(guild_id.get())),
    };

    ctx.msg
        .channel_id
        .create_permission(&ctx.serenity.http, overwrite)
        .await?;

    ctx.reply("Channel locked down.").await?;

    Ok(())
}
