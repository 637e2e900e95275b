use serenity::all::{ChannelType, CreateChannel, EditRole, Permissions};

use crate::{
    bot::command::CommandContext,
    data::guild_config::GuildConfigRepository,
    error::AppError,
    model::guild_config::ConfigUpdate,
};

/// One-shot guild setup.
///
/// Creates a Muted role, a mod-log channel and a ticket category, then
/// stores their IDs in the guild config. Safe to rerun; each run creates
/// fresh objects and repoints the config at them.
///
/// Usage: `setup`
pub async fn setup(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    if !ctx.require_permissions(Permissions::MANAGE_GUILD).await? {
        return Ok(());
    }

    let Some(guild_id) = ctx.msg.guild_id else {
        return Ok(());
    };
    let repo = GuildConfigRepository::new(ctx.db);
    let guild_key = guild_id.to_string();

    let muted_role = guild_id
        .create_role(
            &ctx.serenity.http,
            EditRole::new().name("Muted").permissions(Permissions::empty()),
        )
        .await?;
    repo.apply_update(
        &guild_key,
        ConfigUpdate::MutedRoleId(Some(muted_role.id.to_string())),
    )
    .await?;

    let mod_log = guild_id
        .create_channel(
            &ctx.serenity.http,
            CreateChannel::new("mod-log").kind(ChannelType::Text),
        )
        .await?;
    repo.apply_update(
        &guild_key,
        ConfigUpdate::ModLogChannelId(Some(mod_log.id.to_string())),
    )
    .await?;

    let ticket_category = guild_id
        .create_channel(
            &ctx.serenity.http,
            CreateChannel::new("tickets").kind(ChannelType::Category),
        )
        .await?;
    repo.apply_update(
        &guild_key,
        ConfigUpdate::TicketCategoryId(Some(ticket_category.id.to_string())),
    )
    .await?;

    ctx.reply("Setup complete: Muted role, mod-log channel and ticket category created.")
        .await?;

    Ok(())
}
