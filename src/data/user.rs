//! Dashboard user repository.

use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::model::user::UpsertUserParam;

/// Repository providing database operations for dashboard users.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Upserts a user from an OAuth login.
    ///
    /// Inserts a new user or refreshes the existing row's name, avatar and
    /// tokens; each login stores the newest access token so guild-scoped
    /// dashboard checks run against live Discord data.
    ///
    /// # Arguments
    /// - `param` - User details from the Discord API plus exchanged tokens
    ///
    /// # Returns
    /// - `Ok(Model)` - The created or updated user
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn upsert(&self, param: UpsertUserParam) -> Result<entity::user::Model, DbErr> {
        entity::prelude::User::insert(entity::user::ActiveModel {
            discord_id: ActiveValue::Set(param.discord_id),
            name: ActiveValue::Set(param.name),
            avatar_hash: ActiveValue::Set(param.avatar_hash),
            access_token: ActiveValue::Set(param.access_token),
            refresh_token: ActiveValue::Set(param.refresh_token),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::DiscordId)
                .update_columns([
                    entity::user::Column::Name,
                    entity::user::Column::AvatarHash,
                    entity::user::Column::AccessToken,
                    entity::user::Column::RefreshToken,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await
    }

    /// Finds a user by primary key.
    ///
    /// # Arguments
    /// - `id` - Row ID stored in the session
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    /// Finds a user by their Discord ID.
    pub async fn find_by_discord_id(
        &self,
        discord_id: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::DiscordId.eq(discord_id))
            .one(self.db)
            .await
    }
}
