use std::fmt::Write;

use crate::{bot::command::CommandContext, error::AppError, model::guild_config::FeatureName};

const MAX_LISTED_TRACKS: usize = 10;

/// Shows the current queue.
///
/// Usage: `queue`
pub async fn queue(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    if !ctx.require_feature(FeatureName::Music).await? {
        return Ok(());
    }

    let Some(guild_id) = ctx.msg.guild_id else {
        return Ok(());
    };

    let snapshot = ctx.music.snapshot(guild_id.get());

    let Some(playing) = snapshot.playing else {
        ctx.reply("Nothing is playing.").await?;
        return Ok(());
    };

    let mut text = format!("Now playing: **{}**", playing.title);
    for (i, track) in snapshot.upcoming.iter().take(MAX_LISTED_TRACKS).enumerate() {
        let _ = write!(text, "\n{}. {}", i + 1, track.title);
    }
    if snapshot.upcoming.len() > MAX_LISTED_TRACKS {
        let _ = write!(
            text,
            "\n...and {} more",
            snapshot.upcoming.len() - MAX_LISTED_TRACKS
        );
    }

    ctx.reply(text).await?;

    Ok(())
}
