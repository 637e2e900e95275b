//! Welcome config factory for creating test welcome rows.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a welcome config row with default embed values for the guild.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Discord guild ID the config belongs to
///
/// # Returns
/// - `Ok(Model)` - Created welcome config entity
/// - `Err(DbErr)` - Database error during creation
pub async fn create_welcome_config(
    db: &DatabaseConnection,
    guild_id: &str,
) -> Result<entity::welcome_config::Model, DbErr> {
    entity::welcome_config::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.to_string()),
        enabled: ActiveValue::Set(false),
        channel_id: ActiveValue::Set(None),
        title: ActiveValue::Set("Welcome to {server}!".to_string()),
        description: ActiveValue::Set(
            "Hey {mention}, welcome aboard! You are member #{memberCount}.".to_string(),
        ),
        color: ActiveValue::Set("#5865F2".to_string()),
        footer: ActiveValue::Set(None),
        show_avatar: ActiveValue::Set(true),
        image: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}
