//! Welcome config repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::model::welcome::UpdateWelcomeParams;

const DEFAULT_TITLE: &str = "Welcome to {server}!";
const DEFAULT_DESCRIPTION: &str = "Hey {mention}, welcome aboard! You are member #{memberCount}.";
const DEFAULT_COLOR: &str = "#5865F2";

/// Repository providing database operations for per-guild welcome messages.
pub struct WelcomeConfigRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WelcomeConfigRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetches the guild's welcome config, creating defaults on first access.
    ///
    /// Welcome messages start disabled with no channel; the default embed
    /// carries the standard placeholder template.
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
    ) -> Result<entity::welcome_config::Model, DbErr> {
        let existing = entity::prelude::WelcomeConfig::find()
            .filter(entity::welcome_config::Column::GuildId.eq(guild_id))
            .one(self.db)
            .await?;

        if let Some(existing) = existing {
            return Ok(existing);
        }

        entity::welcome_config::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            enabled: ActiveValue::Set(false),
            channel_id: ActiveValue::Set(None),
            title: ActiveValue::Set(DEFAULT_TITLE.to_string()),
            description: ActiveValue::Set(DEFAULT_DESCRIPTION.to_string()),
            color: ActiveValue::Set(DEFAULT_COLOR.to_string()),
            footer: ActiveValue::Set(None),
            show_avatar: ActiveValue::Set(true),
            image: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Applies a partial-field merge and returns the resulting row.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `params` - Partial update; `None` fields keep their stored values
    ///
    /// # Returns
    /// - `Ok(Model)` - The merged config row
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(
        &self,
        guild_id: &str,
        params: UpdateWelcomeParams,
    ) -> Result<entity::welcome_config::Model, DbErr> {
        let existing = self.get_or_create(guild_id).await?;
        let mut active: entity::welcome_config::ActiveModel = existing.into();

        if let Some(enabled) = params.enabled {
            active.enabled = ActiveValue::Set(enabled);
        }
        if let Some(channel_id) = params.channel_id {
            active.channel_id = ActiveValue::Set(channel_id);
        }
        if let Some(title) = params.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(color) = params.color {
            active.color = ActiveValue::Set(color);
        }
        if let Some(footer) = params.footer {
            active.footer = ActiveValue::Set(footer);
        }
        if let Some(show_avatar) = params.show_avatar {
            active.show_avatar = ActiveValue::Set(show_avatar);
        }
        if let Some(image) = params.image {
            active.image = ActiveValue::Set(image);
        }

        active.update(self.db).await
    }
}
