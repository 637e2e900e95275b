use crate::{bot::command::CommandContext, error::AppError, model::guild_config::FeatureName};

/// Stops playback and clears the guild's queue.
///
/// Usage: `stop`
pub async fn stop(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    if !ctx.require_feature(FeatureName::Music).await? {
        return Ok(());
    }

    let Some(guild_id) = ctx.msg.guild_id else {
        return Ok(());
    };

    if ctx.music.stop(guild_id.get()) {
        ctx.reply("Stopped playback and cleared the queue.").await?;
    } else {
        ctx.reply("Nothing is playing.").await?;
    }

    Ok(())
}
