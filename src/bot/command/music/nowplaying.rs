use crate::{bot::command::CommandContext, error::AppError, model::guild_config::FeatureName};

/// Shows the track at the front of the queue.
///
/// Usage: `nowplaying` (alias `np`)
pub async fn nowplaying(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    if !ctx.require_feature(FeatureName::Music).await? {
        return Ok(());
    }

    let Some(guild_id) = ctx.msg.guild_id else {
        return Ok(());
    };

    match ctx.music.snapshot(guild_id.get()).playing {
        Some(track) => {
            ctx.reply(format!(
                "Now playing: **{}** (requested by <@{}>)",
                track.title, track.requested_by
            ))
            .await?;
        }
        None => {
            ctx.reply("Nothing is playing.").await?;
        }
    }

    Ok(())
}
