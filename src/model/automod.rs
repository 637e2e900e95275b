//! Automod policy domain model and update parameters.

use crate::{
    error::{internal::InternalError, AppError},
    model::api::{AutomodConfigDto, UpdateAutomodDto},
};

/// Decoded automod policy for one guild.
///
/// The entity stores the word list and whitelists as JSON text columns; this
/// model carries them decoded so the filtering pipeline works on plain
/// vectors. Decoding happens once at the repository boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct AutomodPolicy {
    pub guild_id: String,
    pub enabled: bool,
    /// Lowercased banned terms, matched whole-word and case-insensitively.
    pub banned_words: Vec<String>,
    pub warn_on_violation: bool,
    pub mute_on_violation: bool,
    pub warnings_before_mute: i32,
    pub warning_expiry_hours: i32,
    pub mute_duration_minutes: i32,
    pub delete_messages: bool,
    pub whitelist_roles: Vec<String>,
    pub whitelist_members: Vec<String>,
}

impl AutomodPolicy {
    /// Converts an entity model to a policy at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(AutomodPolicy)` - Decoded policy
    /// - `Err(AppError::InternalErr(CorruptJsonColumn))` - A stored JSON
    ///   column failed to deserialize
    pub fn from_entity(entity: entity::automod_config::Model) -> Result<Self, AppError> {
        Ok(Self {
            guild_id: entity.guild_id,
            enabled: entity.enabled,
            banned_words: decode_list("banned_words", &entity.banned_words)?,
            warn_on_violation: entity.warn_on_violation,
            mute_on_violation: entity.mute_on_violation,
            warnings_before_mute: entity.warnings_before_mute,
            warning_expiry_hours: entity.warning_expiry_hours,
            mute_duration_minutes: entity.mute_duration_minutes,
            delete_messages: entity.delete_messages,
            whitelist_roles: decode_list("whitelist_roles", &entity.whitelist_roles)?,
            whitelist_members: decode_list("whitelist_members", &entity.whitelist_members)?,
        })
    }

    pub fn into_dto(self) -> AutomodConfigDto {
        AutomodConfigDto {
            enabled: self.enabled,
            banned_words: self.banned_words,
            warn_on_violation: self.warn_on_violation,
            mute_on_violation: self.mute_on_violation,
            warnings_before_mute: self.warnings_before_mute,
            warning_expiry_hours: self.warning_expiry_hours,
            mute_duration_minutes: self.mute_duration_minutes,
            delete_messages: self.delete_messages,
            whitelist_roles: self.whitelist_roles,
            whitelist_members: self.whitelist_members,
        }
    }
}

fn decode_list(column: &'static str, raw: &str) -> Result<Vec<String>, AppError> {
    let list = serde_json::from_str(raw)
        .map_err(|e| InternalError::CorruptJsonColumn { column, source: e })?;
    Ok(list)
}

/// Parameters for a partial automod policy update.
///
/// Fields left as `None` keep their stored value. Banned words are normalized
/// to lowercase here so the stored list always matches the case-insensitive
/// filter's expectations.
#[derive(Debug, Clone, Default)]
pub struct UpdateAutomodParams {
    pub enabled: Option<bool>,
    pub banned_words: Option<Vec<String>>,
    pub warn_on_violation: Option<bool>,
    pub mute_on_violation: Option<bool>,
    pub warnings_before_mute: Option<i32>,
    pub warning_expiry_hours: Option<i32>,
    pub mute_duration_minutes: Option<i32>,
    pub delete_messages: Option<bool>,
    pub whitelist_roles: Option<Vec<String>>,
    pub whitelist_members: Option<Vec<String>>,
}

impl UpdateAutomodParams {
    /// Validates the numeric policy bounds and the banned-word list.
    ///
    /// # Returns
    /// - `Ok(())` - All provided thresholds are within range and every
    ///   banned term has content
    /// - `Err(AppError::BadRequest)` - A threshold is zero or negative, or a
    ///   banned term is empty or whitespace
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(words) = &self.banned_words {
            if words.iter().any(|w| w.trim().is_empty()) {
                return Err(AppError::BadRequest(
                    "banned_words must not contain empty terms".to_string(),
                ));
            }
        }
        if matches!(self.warnings_before_mute, Some(n) if n < 1) {
            return Err(AppError::BadRequest(
                "warnings_before_mute must be at least 1".to_string(),
            ));
        }
        if matches!(self.warning_expiry_hours, Some(n) if n < 1) {
            return Err(AppError::BadRequest(
                "warning_expiry_hours must be positive".to_string(),
            ));
        }
        if matches!(self.mute_duration_minutes, Some(n) if n < 1) {
            return Err(AppError::BadRequest(
                "mute_duration_minutes must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl From<UpdateAutomodDto> for UpdateAutomodParams {
    fn from(dto: UpdateAutomodDto) -> Self {
        Self {
            enabled: dto.enabled,
            banned_words: dto
                .banned_words
                .map(|words| words.into_iter().map(|w| w.to_lowercase()).collect()),
            warn_on_violation: dto.warn_on_violation,
            mute_on_violation: dto.mute_on_violation,
            warnings_before_mute: dto.warnings_before_mute,
            warning_expiry_hours: dto.warning_expiry_hours,
            mute_duration_minutes: dto.mute_duration_minutes,
            delete_messages: dto.delete_messages,
            whitelist_roles: dto.whitelist_roles,
            whitelist_members: dto.whitelist_members,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    /// Tests banned-word list validation. Expected: empty and
    /// whitespace-only terms are rejected, real terms pass.
    #[test]
    fn rejects_empty_banned_terms() {
        let empty = UpdateAutomodParams {
            banned_words: Some(vec!["badword".to_string(), String::new()]),
            ..Default::default()
        };
        assert!(matches!(empty.validate(), Err(AppError::BadRequest(_))));

        let whitespace = UpdateAutomodParams {
            banned_words: Some(vec!["  ".to_string()]),
            ..Default::default()
        };
        assert!(matches!(whitespace.validate(), Err(AppError::BadRequest(_))));

        let valid = UpdateAutomodParams {
            banned_words: Some(vec!["badword".to_string()]),
            ..Default::default()
        };
        assert!(valid.validate().is_ok());
    }

    /// Tests the numeric threshold bounds. Expected: zero or negative
    /// thresholds are rejected.
    #[test]
    fn rejects_out_of_range_thresholds() {
        let update = UpdateAutomodParams {
            warnings_before_mute: Some(0),
            ..Default::default()
        };
        assert!(matches!(update.validate(), Err(AppError::BadRequest(_))));

        let update = UpdateAutomodParams {
            mute_duration_minutes: Some(-5),
            ..Default::default()
        };
        assert!(matches!(update.validate(), Err(AppError::BadRequest(_))));
    }
}
