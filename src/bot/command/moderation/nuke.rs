use serenity::all::{CreateChannel, Permissions};

use crate::{bot::command::CommandContext, error::AppError, model::guild_config::FeatureName};

/// Recreates the invoking channel from scratch.
///
/// Clones the channel's name, topic, kind, position and category, deletes
/// the original, and greets from the clone. Clears the entire history where
/// `clear` is capped at 100 messages.
///
/// Usage: `nuke`
pub async fn nuke(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    if !ctx.require_feature(FeatureName::Moderation).await? {
        return Ok(());
    }
    if !ctx.require_permissions(Permissions::MANAGE_CHANNELS).await? {
        return Ok(());
    }

    let Some(guild_id) = ctx.msg.guild_id else {
        return Ok(());
    };

    let Some(channel) = ctx
        .serenity
        .http
        .get_channel(ctx.msg.channel_id)
        .await?
        .guild()
    else {
        return Ok(());
    };

    let mut builder = CreateChannel::new(channel.name.clone())
        .kind(channel.kind)
        .position(channel.position);
    if let Some(topic) = channel.topic.clone() {
        builder = builder.topic(topic);
    }
    if channel.nsfw {
        builder = builder.nsfw(true);
    }
    if let Some(parent_id) = channel.parent_id {
        builder = builder.category(parent_id);
    }

    let clone = guild_id.create_channel(&ctx.serenity.http, builder).await?;

    ctx.msg.channel_id.delete(&ctx.serenity.http).await?;

    if let Err(e) = clone
        .id
        .say(&ctx.serenity.http, "Channel nuked from orbit.")
        .await
    {
        tracing::debug!("Failed to greet from nuked channel: {}", e);
    }

    Ok(())
}
