use serenity::all::{CreateEmbed, CreateMessage};

use crate::{bot::command::CommandContext, error::AppError, model::guild_config::FeatureName};

const INFO_COLOR: u32 = 0x5865F2;

/// Shows basic information about the guild.
///
/// Usage: `serverinfo`
pub async fn serverinfo(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    if !ctx.require_feature(FeatureName::Info).await? {
        return Ok(());
    }

    let Some(guild_id) = ctx.msg.guild_id else {
        return Ok(());
    };

    // Cache guild refs are not Send; copy the fields before any await.
    let Some((name, member_count, owner_id, created_at)) =
        ctx.serenity.cache.guild(guild_id).map(|guild| {
            (
                guild.name.clone(),
                guild.member_count,
                guild.owner_id,
                guild.id.created_at(),
            )
        })
    else {
        ctx.reply("Server information is not available right now.")
            .await?;
        return Ok(());
    };

    let embed = CreateEmbed::new()
        .title(name)
        .color(INFO_COLOR)
        .field("Members", member_count.to_string(), true)
        .field("Owner", format!("<@{}>", owner_id), true)
        .field("Created", format!("<t:{}:D>", created_at.unix_timestamp()), true);

    ctx.msg
        .channel_id
        .send_message(&ctx.serenity.http, CreateMessage::new().embed(embed))
        .await?;

    Ok(())
}
