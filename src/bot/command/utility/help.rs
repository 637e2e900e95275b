use serenity::all::{CreateEmbed, CreateMessage};

use crate::{bot::command::CommandContext, error::AppError};

const HELP_COLOR: u32 = 0x5865F2;

/// Lists the available commands grouped by area.
///
/// Usage: `help`
pub async fn help(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let p = &ctx.config.prefix;

    let embed = CreateEmbed::new()
        .title("Commands")
        .color(HELP_COLOR)
        .field(
            "Moderation",
            format!(
                "`{p}kick` `{p}ban` `{p}clear` `{p}mute` `{p}unmute` `{p}lockdown` `{p}unlock` `{p}slowmode` `{p}nuke`"
            ),
            false,
        )
        .field(
            "Utility",
            format!(
                "`{p}prefix` `{p}setup` `{p}ping` `{p}uptime` `{p}serverinfo` `{p}userinfo` `{p}invite` `{p}debug`"
            ),
            false,
        )
        .field("Tickets", format!("`{p}ticket`"), false)
        .field(
            "Music",
            format!("`{p}play` `{p}skip` `{p}queue` `{p}nowplaying` `{p}stop`"),
            false,
        );

    ctx.msg
        .channel_id
        .send_message(&ctx.serenity.http, CreateMessage::new().embed(embed))
        .await?;

    Ok(())
}
