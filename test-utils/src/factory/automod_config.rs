//! Automod config factory for creating test policy rows.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating automod configs with customizable fields.
///
/// Provides a builder pattern for creating automod policy entities with
/// default values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::automod_config::AutomodConfigFactory;
///
/// let config = AutomodConfigFactory::new(&db)
///     .guild_id("123456789")
///     .enabled(true)
///     .banned_words(&["badword", "slur"])
///     .warnings_before_mute(3)
///     .build()
///     .await?;
/// ```
pub struct AutomodConfigFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    enabled: bool,
    banned_words: Vec<String>,
    warn_on_violation: bool,
    mute_on_violation: bool,
    warnings_before_mute: i32,
    warning_expiry_hours: i32,
    mute_duration_minutes: i32,
    delete_messages: bool,
    whitelist_roles: Vec<String>,
    whitelist_members: Vec<String>,
}

impl<'a> AutomodConfigFactory<'a> {
    /// Creates a new factory with default policy values.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guild_id: format!("guild-{}", next_id()),
            enabled: true,
            banned_words: Vec::new(),
            warn_on_violation: true,
            mute_on_violation: true,
            warnings_before_mute: 3,
            warning_expiry_hours: 24,
            mute_duration_minutes: 10,
            delete_messages: true,
            whitelist_roles: Vec::new(),
            whitelist_members: Vec::new(),
        }
    }

    pub fn guild_id(mut self, guild_id: &str) -> Self {
        self.guild_id = guild_id.to_string();
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn banned_words(mut self, words: &[&str]) -> Self {
        self.banned_words = words.iter().map(|w| w.to_string()).collect();
        self
    }

    pub fn warn_on_violation(mut self, warn: bool) -> Self {
        self.warn_on_violation = warn;
        self
    }

    pub fn mute_on_violation(mut self, mute: bool) -> Self {
        self.mute_on_violation = mute;
        self
    }

    pub fn warnings_before_mute(mut self, count: i32) -> Self {
        self.warnings_before_mute = count;
        self
    }

    pub fn warning_expiry_hours(mut self, hours: i32) -> Self {
        self.warning_expiry_hours = hours;
        self
    }

    pub fn mute_duration_minutes(mut self, minutes: i32) -> Self {
        self.mute_duration_minutes = minutes;
        self
    }

    pub fn delete_messages(mut self, delete: bool) -> Self {
        self.delete_messages = delete;
        self
    }

    pub fn whitelist_roles(mut self, roles: &[&str]) -> Self {
        self.whitelist_roles = roles.iter().map(|r| r.to_string()).collect();
        self
    }

    pub fn whitelist_members(mut self, members: &[&str]) -> Self {
        self.whitelist_members = members.iter().map(|m| m.to_string()).collect();
        self
    }

    /// Inserts the configured automod config into the database.
    pub async fn build(self) -> Result<entity::automod_config::Model, DbErr> {
        entity::automod_config::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            enabled: ActiveValue::Set(self.enabled),
            banned_words: ActiveValue::Set(
                serde_json::to_string(&self.banned_words).expect("serialize banned words"),
            ),
            warn_on_violation: ActiveValue::Set(self.warn_on_violation),
            mute_on_violation: ActiveValue::Set(self.mute_on_violation),
            warnings_before_mute: ActiveValue::Set(self.warnings_before_mute),
            warning_expiry_hours: ActiveValue::Set(self.warning_expiry_hours),
            mute_duration_minutes: ActiveValue::Set(self.mute_duration_minutes),
            delete_messages: ActiveValue::Set(self.delete_messages),
            whitelist_roles: ActiveValue::Set(
                serde_json::to_string(&self.whitelist_roles).expect("serialize whitelist roles"),
            ),
            whitelist_members: ActiveValue::Set(
                serde_json::to_string(&self.whitelist_members)
                    .expect("serialize whitelist members"),
            ),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
