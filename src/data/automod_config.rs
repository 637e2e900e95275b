//! Automod config repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::{
    error::AppError,
    model::automod::{AutomodPolicy, UpdateAutomodParams},
};

const EMPTY_LIST: &str = "[]";

/// Repository providing database operations for per-guild automod policies.
///
/// Returns decoded `AutomodPolicy` models; the JSON text columns never leave
/// this boundary.
pub struct AutomodConfigRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AutomodConfigRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetches the guild's automod policy, creating defaults on first access.
    ///
    /// Defaults: disabled, empty word list, warn and mute on violation, three
    /// warnings inside a 24 hour window escalate to a 10 minute mute, matched
    /// messages deleted, empty whitelists.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    ///
    /// # Returns
    /// - `Ok(AutomodPolicy)` - Decoded existing or newly created policy
    /// - `Err(AppError)` - Database error, or a stored JSON column failed to decode
    pub async fn get_or_create(&self, guild_id: &str) -> Result<AutomodPolicy, AppError> {
        let entity = self.get_or_create_entity(guild_id).await?;
        AutomodPolicy::from_entity(entity)
    }

    /// Applies a partial-field merge and returns the resulting policy.
    ///
    /// Fields left as `None` in the params keep their stored values.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `params` - Validated partial update
    ///
    /// # Returns
    /// - `Ok(AutomodPolicy)` - The merged policy
    /// - `Err(AppError)` - Database error or JSON encoding failure
    pub async fn update(
        &self,
        guild_id: &str,
        params: UpdateAutomodParams,
    ) -> Result<AutomodPolicy, AppError> {
        let existing = self.get_or_create_entity(guild_id).await?;
        let mut active: entity::automod_config::ActiveModel = existing.into();

        if let Some(enabled) = params.enabled {
            active.enabled = ActiveValue::Set(enabled);
        }
        if let Some(words) = params.banned_words {
            active.banned_words = ActiveValue::Set(encode_list(&words)?);
        }
        if let Some(warn) = params.warn_on_violation {
            active.warn_on_violation = ActiveValue::Set(warn);
        }
        if let Some(mute) = params.mute_on_violation {
            active.mute_on_violation = ActiveValue::Set(mute);
        }
        if let Some(threshold) = params.warnings_before_mute {
            active.warnings_before_mute = ActiveValue::Set(threshold);
        }
        if let Some(hours) = params.warning_expiry_hours {
            active.warning_expiry_hours = ActiveValue::Set(hours);
        }
        if let Some(minutes) = params.mute_duration_minutes {
            active.mute_duration_minutes = ActiveValue::Set(minutes);
        }
        if let Some(delete) = params.delete_messages {
            active.delete_messages = ActiveValue::Set(delete);
        }
        if let Some(roles) = params.whitelist_roles {
            active.whitelist_roles = ActiveValue::Set(encode_list(&roles)?);
        }
        if let Some(members) = params.whitelist_members {
            active.whitelist_members = ActiveValue::Set(encode_list(&members)?);
        }

        let updated = active.update(self.db).await?;
        AutomodPolicy::from_entity(updated)
    }

    async fn get_or_create_entity(
        &self,
        guild_id: &str,
    ) -> Result<entity::automod_config::Model, DbErr> {
        let existing = entity::prelude::AutomodConfig::find()
            .filter(entity::automod_config::Column::GuildId.eq(guild_id))
            .one(self.db)
            .await?;

        if let Some(existing) = existing {
            return Ok(existing);
        }

        entity::automod_config::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            enabled: ActiveValue::Set(false),
            banned_words: ActiveValue::Set(EMPTY_LIST.to_string()),
            warn_on_violation: ActiveValue::Set(true),
            mute_on_violation: ActiveValue::Set(true),
            warnings_before_mute: ActiveValue::Set(3),
            warning_expiry_hours: ActiveValue::Set(24),
            mute_duration_minutes: ActiveValue::Set(10),
            delete_messages: ActiveValue::Set(true),
            whitelist_roles: ActiveValue::Set(EMPTY_LIST.to_string()),
            whitelist_members: ActiveValue::Set(EMPTY_LIST.to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

fn encode_list(list: &[String]) -> Result<String, AppError> {
    serde_json::to_string(list)
        .map_err(|e| AppError::InternalError(format!("Failed to encode JSON list column: {}", e)))
}
