//! Moderation side effects against Discord.
//!
//! Issues and lifts timed mutes and posts mod-log embeds. External effects
//! (timeouts, role changes, log posts) are best-effort: a member who left or
//! a deleted channel must not abort the moderation action itself.

use chrono::{DateTime, Duration, Utc};
use sea_orm::DatabaseConnection;
use serenity::all::{
    ChannelId, CreateEmbed, CreateMessage, EditMember, GuildId, RoleId, Timestamp, UserId,
};
use serenity::http::Http;
use std::sync::Arc;

use crate::{
    data::{guild_config::GuildConfigRepository, mute::MuteRepository},
    error::{internal::InternalError, AppError},
};

const MOD_LOG_COLOR: u32 = 0xED4245;

/// Service for moderation actions that touch both Discord and the store.
pub struct ModerationService<'a> {
    db: &'a DatabaseConnection,
    http: Arc<Http>,
}

impl<'a> ModerationService<'a> {
    pub fn new(db: &'a DatabaseConnection, http: Arc<Http>) -> Self {
        Self { db, http }
    }

    /// Issues a timed mute against a member.
    ///
    /// Applies a Discord timeout until the expiry, applies the configured
    /// muted role when one is set (both best-effort), records the Mute row,
    /// and posts a mod-log embed when a log channel is configured.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the mute applies in
    /// - `user_id` - Member to mute
    /// - `duration` - How long the mute lasts
    /// - `reason` - Shown in the audit log and mod-log embed
    ///
    /// # Returns
    /// - `Ok(DateTime<Utc>)` - The computed expiry now stored on the Mute row
    /// - `Err(AppError)` - Database failure recording the mute
    pub async fn issue_timed_mute(
        &self,
        guild_id: u64,
        user_id: u64,
        duration: Duration,
        reason: &str,
    ) -> Result<DateTime<Utc>, AppError> {
        let expires_at = Utc::now() + duration;

        if let Err(e) = self.apply_timeout(guild_id, user_id, expires_at).await {
            tracing::warn!("Failed to apply timeout to {}: {}", user_id, e);
        }

        let config = GuildConfigRepository::new(self.db)
            .get_or_create(&guild_id.to_string())
            .await?;

        if let Some(role_id) = parse_id(config.muted_role_id.as_deref()) {
            if let Err(e) = self
                .http
                .add_member_role(
                    GuildId::new(guild_id),
                    UserId::new(user_id),
                    RoleId::new(role_id),
                    Some(reason),
                )
                .await
            {
                tracing::warn!("Failed to apply muted role to {}: {}", user_id, e);
            }
        }

        MuteRepository::new(self.db)
            .upsert(&guild_id.to_string(), &user_id.to_string(), expires_at)
            .await?;

        self.send_mod_log(
            &config,
            "Member muted",
            &format!(
                "<@{}> muted until <t:{}>: {}",
                user_id,
                expires_at.timestamp(),
                reason
            ),
        )
        .await;

        Ok(expires_at)
    }

    /// Lifts a member's mute.
    ///
    /// Reverses the Discord timeout and removes the configured muted role
    /// (both best-effort), then deletes the Mute row. Idempotent.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the mute applies in
    /// - `user_id` - Member to unmute
    ///
    /// # Returns
    /// - `Ok(())` - Row removed; Discord reversal attempted
    /// - `Err(AppError)` - Database failure removing the mute
    pub async fn lift_mute(&self, guild_id: u64, user_id: u64) -> Result<(), AppError> {
        if let Err(e) = GuildId::new(guild_id)
            .edit_member(
                &self.http,
                UserId::new(user_id),
                EditMember::new().enable_communication(),
            )
            .await
        {
            tracing::warn!("Failed to clear timeout for {}: {}", user_id, e);
        }

        let config = GuildConfigRepository::new(self.db)
            .get_or_create(&guild_id.to_string())
            .await?;

        if let Some(role_id) = parse_id(config.muted_role_id.as_deref()) {
            if let Err(e) = self
                .http
                .remove_member_role(
                    GuildId::new(guild_id),
                    UserId::new(user_id),
                    RoleId::new(role_id),
                    Some("Mute lifted"),
                )
                .await
            {
                tracing::warn!("Failed to remove muted role from {}: {}", user_id, e);
            }
        }

        MuteRepository::new(self.db)
            .remove(&guild_id.to_string(), &user_id.to_string())
            .await?;

        Ok(())
    }

    /// Posts an embed to the guild's mod-log channel, when one is configured.
    ///
    /// Best-effort: a missing or deleted channel is logged and ignored.
    pub async fn send_mod_log(
        &self,
        config: &entity::guild_config::Model,
        title: &str,
        description: &str,
    ) {
        let Some(channel_id) = parse_id(config.mod_log_channel_id.as_deref()) else {
            return;
        };

        let embed = CreateEmbed::new()
            .title(title)
            .description(description)
            .color(MOD_LOG_COLOR);

        if let Err(e) = ChannelId::new(channel_id)
            .send_message(&self.http, CreateMessage::new().embed(embed))
            .await
        {
            tracing::warn!("Failed to post mod log in guild {}: {}", config.guild_id, e);
        }
    }

    async fn apply_timeout(
        &self,
        guild_id: u64,
        user_id: u64,
        until: DateTime<Utc>,
    ) -> Result<(), AppError> {
        let timestamp = Timestamp::from_unix_timestamp(until.timestamp()).map_err(|e| {
            InternalError::InvalidDiscordTimestamp {
                timestamp: until.timestamp(),
                reason: e.to_string(),
            }
        })?;

        GuildId::new(guild_id)
            .edit_member(
                &self.http,
                UserId::new(user_id),
                EditMember::new().disable_communication_until_datetime(timestamp),
            )
            .await?;

        Ok(())
    }
}

fn parse_id(value: Option<&str>) -> Option<u64> {
    value.and_then(|v| v.parse::<u64>().ok())
}
