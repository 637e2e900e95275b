//! Violation repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

/// Retention cap per guild; oldest rows are evicted past this count.
const MAX_VIOLATIONS_PER_GUILD: u64 = 1000;

/// Repository providing database operations for automod violations.
///
/// Append-only with count-based retention: each guild keeps at most the most
/// recent 1000 violations.
pub struct ViolationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ViolationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a violation, evicting the guild's oldest rows past the cap.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `user_id` - Discord user ID of the offending member
    /// - `reason` - Why the message was flagged
    /// - `content` - The offending message content
    ///
    /// # Returns
    /// - `Ok(Model)` - The recorded violation
    /// - `Err(DbErr)` - Database error during insert or eviction
    pub async fn create(
        &self,
        guild_id: &str,
        user_id: &str,
        reason: &str,
        content: &str,
    ) -> Result<entity::violation::Model, DbErr> {
        let violation = entity::violation::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            user_id: ActiveValue::Set(user_id.to_string()),
            reason: ActiveValue::Set(reason.to_string()),
            content: ActiveValue::Set(content.to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.evict_over_cap(guild_id).await?;

        Ok(violation)
    }

    /// Lists the guild's most recent violations, newest first.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `limit` - Maximum number of rows to return
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Violations ordered most recent first
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_recent(
        &self,
        guild_id: &str,
        limit: u64,
    ) -> Result<Vec<entity::violation::Model>, DbErr> {
        entity::prelude::Violation::find()
            .filter(entity::violation::Column::GuildId.eq(guild_id))
            .order_by_desc(entity::violation::Column::Id)
            .limit(limit)
            .all(self.db)
            .await
    }

    async fn evict_over_cap(&self, guild_id: &str) -> Result<(), DbErr> {
        let count = entity::prelude::Violation::find()
            .filter(entity::violation::Column::GuildId.eq(guild_id))
            .count(self.db)
            .await?;

        if count <= MAX_VIOLATIONS_PER_GUILD {
            return Ok(());
        }

        let oldest: Vec<i32> = entity::prelude::Violation::find()
            .filter(entity::violation::Column::GuildId.eq(guild_id))
            .order_by_asc(entity::violation::Column::Id)
            .limit(count - MAX_VIOLATIONS_PER_GUILD)
            .all(self.db)
            .await?
            .into_iter()
            .map(|v| v.id)
            .collect();

        entity::prelude::Violation::delete_many()
            .filter(entity::violation::Column::Id.is_in(oldest))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
