use crate::{
    bot::command::CommandContext,
    error::AppError,
    model::{guild_config::FeatureName, music::Track},
    service::music::Enqueued,
};

/// Adds a track to the guild's queue.
///
/// Usage: `play <title or url>`
pub async fn play(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    if !ctx.require_feature(FeatureName::Music).await? {
        return Ok(());
    }

    if ctx.args.is_empty() {
        ctx.reply("Usage: play <title or url>").await?;
        return Ok(());
    }

    let Some(guild_id) = ctx.msg.guild_id else {
        return Ok(());
    };

    let track = Track {
        title: ctx.args.join(" "),
        requested_by: ctx.msg.author.id.get(),
    };
    let title = track.title.clone();

    match ctx.music.enqueue(guild_id.get(), track) {
        Enqueued::NowPlaying => {
            ctx.reply(format!("Now playing: **{}**", title)).await?;
        }
        Enqueued::Queued(position) => {
            ctx.reply(format!("Queued **{}** at position {}.", title, position))
                .await?;
        }
    }

    Ok(())
}
