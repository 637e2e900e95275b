//! Command log repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

/// Repository providing database operations for the command audit log.
pub struct CommandLogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommandLogRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records one attempted command invocation.
    ///
    /// Every known command is logged whether its handler succeeded or not;
    /// unknown tokens are never logged.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID the command ran in
    /// - `command` - Canonical command name (post alias resolution)
    /// - `user_tag` - Discord tag of the invoking user
    /// - `success` - Whether the handler completed without error
    ///
    /// # Returns
    /// - `Ok(Model)` - The recorded log row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        guild_id: &str,
        command: &str,
        user_tag: &str,
        success: bool,
    ) -> Result<entity::command_log::Model, DbErr> {
        entity::command_log::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            command: ActiveValue::Set(command.to_string()),
            user_tag: ActiveValue::Set(user_tag.to_string()),
            success: ActiveValue::Set(success),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Lists the guild's most recent command logs, newest first.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `limit` - Maximum number of rows to return
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Logs ordered most recent first
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_recent(
        &self,
        guild_id: &str,
        limit: u64,
    ) -> Result<Vec<entity::command_log::Model>, DbErr> {
        entity::prelude::CommandLog::find()
            .filter(entity::command_log::Column::GuildId.eq(guild_id))
            .order_by_desc(entity::command_log::Column::Id)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Counts the guild's commands logged at or after the given time.
    ///
    /// The stats endpoint passes the process start time, so the figure reads
    /// as commands run this session rather than all time.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `since` - Lower bound on the log timestamp, inclusive
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of matching log rows
    /// - `Err(DbErr)` - Database error during query
    pub async fn count_since(
        &self,
        guild_id: &str,
        since: DateTime<Utc>,
    ) -> Result<u64, DbErr> {
        entity::prelude::CommandLog::find()
            .filter(entity::command_log::Column::GuildId.eq(guild_id))
            .filter(entity::command_log::Column::CreatedAt.gte(since))
            .count(self.db)
            .await
    }
}
