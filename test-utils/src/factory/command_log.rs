//! Command log factory for creating test log rows.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a command log row for the given guild.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Discord guild ID
/// - `command` - Canonical command name that was attempted
/// - `success` - Whether the handler completed without error
///
/// # Returns
/// - `Ok(Model)` - Created command log entity
/// - `Err(DbErr)` - Database error during creation
pub async fn create_command_log(
    db: &DatabaseConnection,
    guild_id: &str,
    command: &str,
    success: bool,
) -> Result<entity::command_log::Model, DbErr> {
    create_command_log_at(db, guild_id, command, success, Utc::now()).await
}

/// Creates a command log row with an explicit timestamp.
///
/// Used by tests that need rows on either side of a counting cutoff.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Discord guild ID
/// - `command` - Canonical command name that was attempted
/// - `success` - Whether the handler completed without error
/// - `created_at` - Timestamp to record for the row
///
/// # Returns
/// - `Ok(Model)` - Created command log entity
/// - `Err(DbErr)` - Database error during creation
pub async fn create_command_log_at(
    db: &DatabaseConnection,
    guild_id: &str,
    command: &str,
    success: bool,
    created_at: DateTime<Utc>,
) -> Result<entity::command_log::Model, DbErr> {
    entity::command_log::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.to_string()),
        command: ActiveValue::Set(command.to_string()),
        user_tag: ActiveValue::Set("tester#0001".to_string()),
        success: ActiveValue::Set(success),
        created_at: ActiveValue::Set(created_at),
        ..Default::default()
    }
    .insert(db)
    .await
}
