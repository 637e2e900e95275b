//! Guild config factory for creating test configuration rows.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a guild config row with default values for the given guild.
///
/// The defaults mirror the compiled-in configuration the application
/// materializes on first access: comma prefix, all command features enabled,
/// the automod rate-limit feature disabled, no channel or role IDs set.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Discord guild ID the config belongs to
///
/// # Returns
/// - `Ok(Model)` - Created guild config entity
/// - `Err(DbErr)` - Database error during creation
pub async fn create_config(
    db: &DatabaseConnection,
    guild_id: &str,
) -> Result<entity::guild_config::Model, DbErr> {
    entity::guild_config::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.to_string()),
        prefix: ActiveValue::Set(",".to_string()),
        error_logging: ActiveValue::Set(true),
        status_message: ActiveValue::Set("Watching over the server".to_string()),
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
    .insert(db)
    .await
}
