//! Mute repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

/// Repository providing database operations for active timed mutes.
///
/// At most one row exists per `(guild_id, user_id)`; upserting keeps exactly
/// one row per member with the latest expiry.
pub struct MuteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MuteRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts or replaces the member's active mute.
    ///
    /// A second upsert for the same `(guild, user)` pair replaces the stored
    /// expiry rather than adding a row.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `user_id` - Discord user ID of the muted member
    /// - `expires_at` - When the mute expires
    ///
    /// # Returns
    /// - `Ok(Model)` - The stored mute row
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn upsert(
        &self,
        guild_id: &str,
        user_id: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<entity::mute::Model, DbErr> {
        if let Some(existing) = self.find(guild_id, user_id).await? {
            let mut active: entity::mute::ActiveModel = existing.into();
            active.expires_at = ActiveValue::Set(expires_at);
            return active.update(self.db).await;
        }

        entity::mute::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            user_id: ActiveValue::Set(user_id.to_string()),
            expires_at: ActiveValue::Set(expires_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds the member's active mute, if any.
    pub async fn find(
        &self,
        guild_id: &str,
        user_id: &str,
    ) -> Result<Option<entity::mute::Model>, DbErr> {
        entity::prelude::Mute::find()
            .filter(entity::mute::Column::GuildId.eq(guild_id))
            .filter(entity::mute::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Lists all mutes whose expiry has passed, across every guild.
    ///
    /// # Arguments
    /// - `now` - The instant to compare expiries against
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Expired mutes ready for reversal
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_expired(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Vec<entity::mute::Model>, DbErr> {
        entity::prelude::Mute::find()
            .filter(entity::mute::Column::ExpiresAt.lte(now))
            .all(self.db)
            .await
    }

    /// Removes the member's mute row.
    ///
    /// Idempotent: removing an absent row is not an error.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `user_id` - Discord user ID
    ///
    /// # Returns
    /// - `Ok(())` - Row removed (or was already gone)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn remove(&self, guild_id: &str, user_id: &str) -> Result<(), DbErr> {
        entity::prelude::Mute::delete_many()
            .filter(entity::mute::Column::GuildId.eq(guild_id))
            .filter(entity::mute::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;
        Ok(())
    }
}
