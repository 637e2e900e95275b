//! Warning factory for creating test warning rows.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating warnings with customizable fields.
///
/// The `created_at` override is the main reason this factory exists: warning
/// expiry tests need rows that predate the rolling window.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::warning::WarningFactory;
///
/// let stale = WarningFactory::new(&db)
///     .guild_id("123456789")
///     .user_id("42")
///     .created_at(Utc::now() - chrono::Duration::hours(48))
///     .build()
///     .await?;
/// ```
pub struct WarningFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    user_id: String,
    reason: String,
    created_at: DateTime<Utc>,
}

impl<'a> WarningFactory<'a> {
    /// Creates a new factory with default values and a current timestamp.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guild_id: "123456789".to_string(),
            user_id: "987654321".to_string(),
            reason: "Banned word".to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn guild_id(mut self, guild_id: &str) -> Self {
        self.guild_id = guild_id.to_string();
        self
    }

    pub fn user_id(mut self, user_id: &str) -> Self {
        self.user_id = user_id.to_string();
        self
    }

    pub fn reason(mut self, reason: &str) -> Self {
        self.reason = reason.to_string();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Inserts the configured warning into the database.
    pub async fn build(self) -> Result<entity::warning::Model, DbErr> {
        entity::warning::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            user_id: ActiveValue::Set(self.user_id),
            reason: ActiveValue::Set(self.reason),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
