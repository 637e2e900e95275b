//! Welcome message rendering.

use serenity::all::{CreateEmbed, CreateEmbedFooter};

const DEFAULT_EMBED_COLOR: u32 = 0x5865F2;

/// Values substituted into a welcome template at send time.
pub struct PlaceholderContext<'a> {
    pub server_name: &'a str,
    pub user_name: &'a str,
    pub mention: &'a str,
    pub member_count: u64,
}

/// Substitutes the welcome placeholders into a template.
///
/// Supported placeholders: `{server}`, `{mention}`, `{user}`,
/// `{memberCount}`. Unknown braces pass through untouched.
///
/// # Arguments
/// - `template` - The stored template text
/// - `ctx` - Values for this join event
///
/// # Returns
/// - `String` - The rendered text
pub fn substitute_placeholders(template: &str, ctx: &PlaceholderContext) -> String {
    template
        .replace("{server}", ctx.server_name)
        .replace("{mention}", ctx.mention)
        .replace("{user}", ctx.user_name)
        .replace("{memberCount}", &ctx.member_count.to_string())
}

/// Parses a `#RRGGBB` color string into an embed color value.
///
/// # Arguments
/// - `value` - Hex color string, with or without the leading `#`
///
/// # Returns
/// - `Some(u32)` - Parsed color
/// - `None` - Not a valid six-digit hex color
pub fn parse_color(value: &str) -> Option<u32> {
    let hex = value.strip_prefix('#').unwrap_or(value);
    if hex.len() != 6 {
        return None;
    }

    u32::from_str_radix(hex, 16).ok()
}

/// Builds the welcome embed for a joining member.
///
/// Placeholders are substituted into the title, description and footer; the
/// member's avatar becomes the thumbnail when `show_avatar` is set.
///
/// # Arguments
/// - `config` - The guild's welcome config
/// - `ctx` - Placeholder values for this join
/// - `avatar_url` - The joining member's avatar URL
///
/// # Returns
/// - `CreateEmbed` - Ready to send to the configured channel
pub fn build_welcome_embed(
    config: &entity::welcome_config::Model,
    ctx: &PlaceholderContext<'_>,
    avatar_url: &str,
) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title(substitute_placeholders(&config.title, ctx))
        .description(substitute_placeholders(&config.description, ctx))
        .color(parse_color(&config.color).unwrap_or(DEFAULT_EMBED_COLOR));

    if let Some(footer) = &config.footer {
        embed = embed.footer(CreateEmbedFooter::new(substitute_placeholders(footer, ctx)));
    }

    if config.show_avatar {
        embed = embed.thumbnail(avatar_url);
    }

    if let Some(image) = &config.image {
        embed = embed.image(image);
    }

    embed
}
