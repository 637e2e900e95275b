//! Member join handler for the welcome system.

use sea_orm::DatabaseConnection;
use serenity::all::{ChannelId, Context, CreateMessage, Member};

use crate::{
    data::welcome_config::WelcomeConfigRepository,
    service::welcome::{build_welcome_embed, PlaceholderContext},
};

/// Sends the configured welcome embed when a member joins.
///
/// Nothing happens unless the guild's welcome config is enabled and has a
/// channel set. Sending is best-effort.
pub async fn handle_guild_member_addition(db: &DatabaseConnection, ctx: Context, new_member: Member) {
    let guild_id = new_member.guild_id;

    let config = match WelcomeConfigRepository::new(db)
        .get_or_create(&guild_id.to_string())
        .await
    {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load welcome config for {}: {}", guild_id, e);
            return;
        }
    };

    if !config.enabled {
        return;
    }

    let Some(channel_id) = config.channel_id.as_deref().and_then(|c| c.parse::<u64>().ok())
    else {
        return;
    };

    // Cache guild refs are not Send; copy what the embed needs before any await.
    let (server_name, member_count) = match ctx.cache.guild(guild_id) {
        Some(guild) => (guild.name.clone(), guild.member_count),
        None => (guild_id.to_string(), 0),
    };

    let mention = format!("<@{}>", new_member.user.id);
    let placeholder_ctx = PlaceholderContext {
        server_name: &server_name,
        user_name: &new_member.user.name,
        mention: &mention,
        member_count,
    };

    let embed = build_welcome_embed(&config, &placeholder_ctx, &new_member.user.face());

    if let Err(e) = ChannelId::new(channel_id)
        .send_message(&ctx.http, CreateMessage::new().embed(embed))
        .await
    {
        tracing::warn!("Failed to send welcome message in {}: {}", guild_id, e);
    }
}
