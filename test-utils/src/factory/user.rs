//! User factory for creating test dashboard users.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating dashboard users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .discord_id("123456789")
///     .name("CustomUser")
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    discord_id: String,
    name: String,
    avatar_hash: Option<String>,
    access_token: String,
    refresh_token: Option<String>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new factory with unique default values.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            discord_id: format!("{}", 100000000 + id),
            name: format!("user-{}", id),
            avatar_hash: None,
            access_token: format!("token-{}", id),
            refresh_token: None,
        }
    }

    pub fn discord_id(mut self, discord_id: &str) -> Self {
        self.discord_id = discord_id.to_string();
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn avatar_hash(mut self, avatar_hash: Option<String>) -> Self {
        self.avatar_hash = avatar_hash;
        self
    }

    pub fn access_token(mut self, access_token: &str) -> Self {
        self.access_token = access_token.to_string();
        self
    }

    pub fn refresh_token(mut self, refresh_token: Option<String>) -> Self {
        self.refresh_token = refresh_token;
        self
    }

    /// Inserts the configured user into the database.
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            discord_id: ActiveValue::Set(self.discord_id),
            name: ActiveValue::Set(self.name),
            avatar_hash: ActiveValue::Set(self.avatar_hash),
            access_token: ActiveValue::Set(self.access_token),
            refresh_token: ActiveValue::Set(self.refresh_token),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
