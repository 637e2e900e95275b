use serenity::all::{CreateEmbed, CreateMessage, UserId};

use crate::{
    bot::command::CommandContext,
    error::AppError,
    model::guild_config::FeatureName,
    util::parse::parse_user_mention,
};

const INFO_COLOR: u32 = 0x5865F2;

/// Shows basic information about a member.
///
/// Usage: `userinfo [@member]` defaulting to the invoker.
pub async fn userinfo(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    if !ctx.require_feature(FeatureName::Info).await? {
        return Ok(());
    }

    let target = ctx
        .args
        .first()
        .and_then(|a| parse_user_mention(a))
        .map(UserId::new)
        .unwrap_or(ctx.msg.author.id);

    let user = target.to_user(ctx.serenity).await?;

    let embed = CreateEmbed::new()
        .title(user.tag())
        .color(INFO_COLOR)
        .thumbnail(user.face())
        .field("ID", user.id.to_string(), true)
        .field(
            "Created",
            format!("<t:{}:D>", user.id.created_at().unix_timestamp()),
            true,
        );

    ctx.msg
        .channel_id
        .send_message(&ctx.serenity.http, CreateMessage::new().embed(embed))
        .await?;

    Ok(())
}
