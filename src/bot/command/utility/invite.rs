use crate::{bot::command::CommandContext, error::AppError, model::guild_config::FeatureName};

/// Replies with the bot's invite link.
///
/// Usage: `invite`
pub async fn invite(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    if !ctx.require_feature(FeatureName::Invite).await? {
        return Ok(());
    }

    let bot_id = ctx.serenity.cache.current_user().id;

    ctx.reply(format!(
        "Invite me: <https://discord.com/oauth2/authorize?client_id={}&scope=bot&permissions=8>",
        bot_id
    ))
    .await?;

    Ok(())
}
