use serenity::all::Permissions;

use crate::{
    bot::command::CommandContext,
    data::guild_config::GuildConfigRepository,
    error::AppError,
    model::guild_config::ConfigUpdate,
};

const MAX_PREFIX_LENGTH: usize = 5;

/// Changes the guild's command prefix.
///
/// Usage: `prefix <new prefix>` with at most five characters.
pub async fn prefix(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    if !ctx.require_permissions(Permissions::MANAGE_GUILD).await? {
        return Ok(());
    }

    let Some(new_prefix) = ctx
        .args
        .first()
        .filter(|p| !p.is_empty() && p.len() <= MAX_PREFIX_LENGTH)
    else {
        ctx.reply(format!(
            "Usage: prefix <up to {} characters>",
            MAX_PREFIX_LENGTH
        ))
        .await?;
        return Ok(());
    };

    let Some(guild_id) = ctx.msg.guild_id else {
        return Ok(());
    };

    GuildConfigRepository::new(ctx.db)
        .apply_update(
            &guild_id.to_string(),
            ConfigUpdate::Prefix(new_prefix.to_string()),
        )
        .await?;

    ctx.reply(format!("Prefix changed to `{}`.", new_prefix))
        .await?;

    Ok(())
}
