use crate::{bot::command::CommandContext, error::AppError, model::guild_config::FeatureName};

/// Skips the current track.
///
/// Usage: `skip`
pub async fn skip(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    if !ctx.require_feature(FeatureName::Music).await? {
        return Ok(());
    }

    let Some(guild_id) = ctx.msg.guild_id else {
        return Ok(());
    };

    match ctx.music.skip(guild_id.get()) {
        Some(next) => {
            ctx.reply(format!("Skipped. Now playing: **{}**", next.title))
                .await?;
        }
        None => {
            ctx.reply("Skipped. The queue is now empty.").await?;
        }
    }

    Ok(())
}
