use serenity::all::{GetMessages, MessageId, Permissions};

use crate::{bot::command::CommandContext, error::AppError, model::guild_config::FeatureName};

const MAX_CLEAR: u8 = 100;

/// Bulk-deletes recent messages in the invoking channel.
///
/// Usage: `clear <1-100>`
pub async fn clear(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    if !ctx.require_feature(FeatureName::Clear).await? {
        return Ok(());
    }
    if !ctx.require_permissions(Permissions::MANAGE_MESSAGES).await? {
        return Ok(());
    }

    let Some(count) = ctx
        .args
        .first()
        .and_then(|a| a.parse::<u8>().ok())
        .filter(|n| (1..=MAX_CLEAR).contains(n))
    else {
        ctx.reply("Usage: clear <1-100>").await?;
        return Ok(());
    };

    let messages = ctx
        .msg
        .channel_id
        .messages(
            &ctx.serenity.http,
            GetMessages::new().before(ctx.msg.id).limit(count),
        )
        .await?;

    let message_ids: Vec<MessageId> = messages.iter().map(|m| m.id).collect();
    let deleted = message_ids.len();

    ctx.msg
        .channel_id
        .delete_messages(&ctx.serenity.http, message_ids)
        .await?;

    ctx.reply(format!("Deleted {} messages.", deleted)).await?;

    Ok(())
}
