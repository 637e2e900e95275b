use serenity::all::{ChannelId, ChannelType, CreateChannel};

use crate::{
    bot::command::CommandContext, data::guild_config::GuildConfigRepository, error::AppError,
};

/// Opens a support ticket channel.
///
/// Increments the guild's monotonic ticket counter and creates a
/// `ticket-<n>` text channel, placed under the configured ticket category
/// when one is set.
///
/// Usage: `ticket`
pub async fn ticket(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let Some(guild_id) = ctx.msg.guild_id else {
        return Ok(());
    };

    let number = GuildConfigRepository::new(ctx.db)
        .increment_ticket_count(&guild_id.to_string())
        .await?;

    let mut builder = CreateChannel::new(format!("ticket-{}", number)).kind(ChannelType::Text);

    if let Some(category_id) = ctx
        .config
        .ticket_category_id
        .as_deref()
        .and_then(|c| c.parse::<u64>().ok())
    {
        builder = builder.category(ChannelId::new(category_id));
    }

    let channel = guild_id.create_channel(&ctx.serenity.http, builder).await?;

    ctx.reply(format!(
        "<@{}>, your ticket is open: <#{}>",
        ctx.msg.author.id, channel.id
    ))
    .await?;

    Ok(())
}
