//! Mute factory for creating test mute rows.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a mute row for the given member with an explicit expiry.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Discord guild ID
/// - `user_id` - Discord user ID of the muted member
/// - `expires_at` - When the mute expires
///
/// # Returns
/// - `Ok(Model)` - Created mute entity
/// - `Err(DbErr)` - Database error during creation
pub async fn create_mute(
    db: &DatabaseConnection,
    guild_id: &str,
    user_id: &str,
    expires_at: DateTime<Utc>,
) -> Result<entity::mute::Model, DbErr> {
    entity::mute::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.to_string()),
        user_id: ActiveValue::Set(user_id.to_string()),
        expires_at: ActiveValue::Set(expires_at),
        ..Default::default()
    }
    .insert(db)
    .await
}
