use std::time::Instant;

use crate::{bot::command::CommandContext, error::AppError, model::guild_config::FeatureName};

/// Replies with the REST round-trip time.
///
/// Usage: `ping`
pub async fn ping(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    if !ctx.require_feature(FeatureName::Ping).await? {
        return Ok(());
    }

    let before = Instant::now();
    let mut reply = ctx
        .msg
        .channel_id
        .say(&ctx.serenity.http, "Pong!")
        .await?;
    let round_trip = before.elapsed().as_millis();

    reply
        .edit(
            ctx.serenity,
            serenity::all::EditMessage::new().content(format!("Pong! `{}ms`", round_trip)),
        )
        .await?;

    Ok(())
}
