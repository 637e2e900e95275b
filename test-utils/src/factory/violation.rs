//! Violation factory for creating test violation rows.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a violation row with the given reason and content.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Discord guild ID
/// - `user_id` - Discord user ID of the offending member
/// - `content` - Message content that triggered the violation
///
/// # Returns
/// - `Ok(Model)` - Created violation entity
/// - `Err(DbErr)` - Database error during creation
pub async fn create_violation(
    db: &DatabaseConnection,
    guild_id: &str,
    user_id: &str,
    content: &str,
) -> Result<entity::violation::Model, DbErr> {
    entity::violation::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.to_string()),
        user_id: ActiveValue::Set(user_id.to_string()),
        reason: ActiveValue::Set("Banned word".to_string()),
        content: ActiveValue::Set(content.to_string()),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
