//! Warning repository.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

/// Repository providing database operations for automod warnings.
///
/// Warnings are append-only and never capped; escalation reads them back
/// through a trailing expiry window, so stale rows simply stop counting.
pub struct WarningRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WarningRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a warning against a member.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `user_id` - Discord user ID of the warned member
    /// - `reason` - Why the warning was issued
    ///
    /// # Returns
    /// - `Ok(Model)` - The recorded warning
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        guild_id: &str,
        user_id: &str,
        reason: &str,
    ) -> Result<entity::warning::Model, DbErr> {
        entity::warning::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            user_id: ActiveValue::Set(user_id.to_string()),
            reason: ActiveValue::Set(reason.to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Counts the member's warnings inside the trailing expiry window.
    ///
    /// Warnings older than `now - expiry_hours` do not count toward mute
    /// escalation.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `user_id` - Discord user ID
    /// - `expiry_hours` - Width of the trailing window in hours
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of warnings still counting
    /// - `Err(DbErr)` - Database error during count
    pub async fn count_recent(
        &self,
        guild_id: &str,
        user_id: &str,
        expiry_hours: i32,
    ) -> Result<u64, DbErr> {
        let cutoff = Utc::now() - Duration::hours(expiry_hours as i64);

        entity::prelude::Warning::find()
            .filter(entity::warning::Column::GuildId.eq(guild_id))
            .filter(entity::warning::Column::UserId.eq(user_id))
            .filter(entity::warning::Column::CreatedAt.gt(cutoff))
            .count(self.db)
            .await
    }

    /// Deletes warnings recorded before the cutoff, across every guild.
    ///
    /// Housekeeping operation for operators; nothing invokes it automatically.
    ///
    /// # Arguments
    /// - `cutoff` - Warnings older than this are removed
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_older_than(&self, cutoff: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::Warning::delete_many()
            .filter(entity::warning::Column::CreatedAt.lt(cutoff))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
