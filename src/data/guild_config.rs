//! Guild config repository.
//!
//! Rows are lazily materialized: the first access for a never-seen guild
//! inserts the compiled-in defaults, and rows are never deleted afterwards.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::model::guild_config::{ConfigUpdate, FeatureName};

/// Default command prefix for new guilds.
pub const DEFAULT_PREFIX: &str = ",";
/// Default bot status line for new guilds.
pub const DEFAULT_STATUS_MESSAGE: &str = "Watching over the server";

/// Repository providing database operations for per-guild configuration.
pub struct GuildConfigRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildConfigRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetches the guild's config row, creating it with defaults on first access.
    ///
    /// All command features default to enabled except the automod rate limiter,
    /// which is opt-in.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    ///
    /// # Returns
    /// - `Ok(Model)` - Existing or newly created config row
    /// - `Err(DbErr)` - Database error during query or insert
    pub async fn get_or_create(
        &self,
        guild_id: &str,
    ) -> Result<entity::guild_config::Model, DbErr> {
        if let Some(existing) = self.find(guild_id).await? {
            return Ok(existing);
        }

        entity::guild_config::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            prefix: ActiveValue::Set(DEFAULT_PREFIX.to_string()),
            error_logging: ActiveValue::Set(true),
            status_message: ActiveValue::Set(DEFAULT_STATUS_MESSAGE.to_string()),
            mod_log_channel_id: ActiveValue::Set(None),
            muted_role_id: ActiveValue::Set(None),
            ticket_category_id: ActiveValue::Set(None),
            staff_role_id: ActiveValue::Set(None),
            ticket_count: ActiveValue::Set(0),
            feature_moderation: ActiveValue::Set(true),
            feature_automod: ActiveValue::Set(false),
            feature_economy: ActiveValue::Set(true),
            feature_music: ActiveValue::Set(true),
            feature_clear: ActiveValue::Set(true),
            feature_mute: ActiveValue::Set(true),
            feature_lockdown: ActiveValue::Set(true),
            feature_invite: ActiveValue::Set(true),
            feature_ping: ActiveValue::Set(true),
            feature_info: ActiveValue::Set(true),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds the config row for a guild without creating it.
    pub async fn find(
        &self,
        guild_id: &str,
    ) -> Result<Option<entity::guild_config::Model>, DbErr> {
        entity::prelude::GuildConfig::find()
            .filter(entity::guild_config::Column::GuildId.eq(guild_id))
            .one(self.db)
            .await
    }

    /// Applies one typed config update and returns the resulting row.
    ///
    /// A feature update touches only the targeted flag; all other columns keep
    /// their stored values.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `update` - Validated update from the controller boundary
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated config row
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn apply_update(
        &self,
        guild_id: &str,
        update: ConfigUpdate,
    ) -> Result<entity::guild_config::Model, DbErr> {
        let existing = self.get_or_create(guild_id).await?;
        let mut active: entity::guild_config::ActiveModel = existing.into();

        match update {
            ConfigUpdate::Prefix(prefix) => {
                active.prefix = ActiveValue::Set(prefix);
            }
            ConfigUpdate::ErrorLogging(enabled) => {
                active.error_logging = ActiveValue::Set(enabled);
            }
            ConfigUpdate::StatusMessage(message) => {
                active.status_message = ActiveValue::Set(message);
            }
            ConfigUpdate::ModLogChannelId(channel_id) => {
                active.mod_log_channel_id = ActiveValue::Set(channel_id);
            }
            ConfigUpdate::MutedRoleId(role_id) => {
                active.muted_role_id = ActiveValue::Set(role_id);
            }
            ConfigUpdate::TicketCategoryId(category_id) => {
                active.ticket_category_id = ActiveValue::Set(category_id);
            }
            ConfigUpdate::StaffRoleId(role_id) => {
                active.staff_role_id = ActiveValue::Set(role_id);
            }
            ConfigUpdate::Feature(feature, enabled) => match feature {
                FeatureName::Moderation => active.feature_moderation = ActiveValue::Set(enabled),
                FeatureName::Automod => active.feature_automod = ActiveValue::Set(enabled),
                FeatureName::Economy => active.feature_economy = ActiveValue::Set(enabled),
                FeatureName::Music => active.feature_music = ActiveValue::Set(enabled),
                FeatureName::Clear => active.feature_clear = ActiveValue::Set(enabled),
                FeatureName::Mute => active.feature_mute = ActiveValue::Set(enabled),
                FeatureName::Lockdown => active.feature_lockdown = ActiveValue::Set(enabled),
                FeatureName::Invite => active.feature_invite = ActiveValue::Set(enabled),
                FeatureName::Ping => active.feature_ping = ActiveValue::Set(enabled),
                FeatureName::Info => active.feature_info = ActiveValue::Set(enabled),
            },
        }

        active.update(self.db).await
    }

    /// Increments the guild's monotonic ticket counter.
    ///
    /// The counter only ever grows; it names new ticket channels and is not
    /// decremented when tickets are closed.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    ///
    /// # Returns
    /// - `Ok(i32)` - The new counter value, used to name the ticket
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn increment_ticket_count(&self, guild_id: &str) -> Result<i32, DbErr> {
        let existing = self.get_or_create(guild_id).await?;
        let next = existing.ticket_count + 1;

        let mut active: entity::guild_config::ActiveModel = existing.into();
        active.ticket_count = ActiveValue::Set(next);
        active.update(self.db).await?;

        Ok(next)
    }
}
