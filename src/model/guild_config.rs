//! Guild configuration domain types.
//!
//! Holds the feature flag naming used across the bot and dashboard, and the
//! typed `ConfigUpdate` that keyed dashboard mutations are parsed into at the
//! controller boundary.

use crate::{
    error::AppError,
    model::api::{FeaturesDto, GuildConfigDto},
};

/// Per-guild feature flags toggled from the dashboard.
///
/// Each variant maps to one boolean column on the guild config row and gates
/// a group of chat commands (or the automod rate limiter for `Automod`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureName {
    Moderation,
    Automod,
    Economy,
    Music,
    Clear,
    Mute,
    Lockdown,
    Invite,
    Ping,
    Info,
}

impl FeatureName {
    /// Every feature flag, in dashboard display order.
    pub const ALL: [FeatureName; 10] = [
        Self::Moderation,
        Self::Automod,
        Self::Economy,
        Self::Music,
        Self::Clear,
        Self::Mute,
        Self::Lockdown,
        Self::Invite,
        Self::Ping,
        Self::Info,
    ];

    /// Resolves a dashboard key segment into a feature flag.
    ///
    /// # Arguments
    /// - `key` - The segment after `features.` in a config update key
    ///
    /// # Returns
    /// - `Some(FeatureName)` - Recognized feature
    /// - `None` - Unknown feature name
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "moderation" => Some(Self::Moderation),
            "automod" => Some(Self::Automod),
            "economy" => Some(Self::Economy),
            "music" => Some(Self::Music),
            "clear" => Some(Self::Clear),
            "mute" => Some(Self::Mute),
            "lockdown" => Some(Self::Lockdown),
            "invite" => Some(Self::Invite),
            "ping" => Some(Self::Ping),
            "info" => Some(Self::Info),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Moderation => "moderation",
            Self::Automod => "automod",
            Self::Economy => "economy",
            Self::Music => "music",
            Self::Clear => "clear",
            Self::Mute => "mute",
            Self::Lockdown => "lockdown",
            Self::Invite => "invite",
            Self::Ping => "ping",
            Self::Info => "info",
        }
    }

    /// Reads this feature's flag off a guild config row.
    pub fn is_enabled(&self, config: &entity::guild_config::Model) -> bool {
        match self {
            Self::Moderation => config.feature_moderation,
            Self::Automod => config.feature_automod,
            Self::Economy => config.feature_economy,
            Self::Music => config.feature_music,
            Self::Clear => config.feature_clear,
            Self::Mute => config.feature_mute,
            Self::Lockdown => config.feature_lockdown,
            Self::Invite => config.feature_invite,
            Self::Ping => config.feature_ping,
            Self::Info => config.feature_info,
        }
    }
}

/// A validated, typed guild config mutation.
///
/// Dashboard updates arrive as `{key, value}` pairs; the raw key string is
/// parsed into one of these variants before it reaches the repository, so the
/// data layer only ever sees well-formed updates.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigUpdate {
    Prefix(String),
    ErrorLogging(bool),
    StatusMessage(String),
    ModLogChannelId(Option<String>),
    MutedRoleId(Option<String>),
    TicketCategoryId(Option<String>),
    StaffRoleId(Option<String>),
    Feature(FeatureName, bool),
}

impl ConfigUpdate {
    /// Parses a keyed dashboard mutation into a typed update.
    ///
    /// Top-level keys map to their column; `features.<name>` keys toggle one
    /// feature flag. Nullable ID columns accept `null` or an empty string to
    /// clear the stored value.
    ///
    /// # Arguments
    /// - `key` - The config key from the request body
    /// - `value` - The raw JSON value to apply
    ///
    /// # Returns
    /// - `Ok(ConfigUpdate)` - Validated update ready for the repository
    /// - `Err(AppError::BadRequest)` - Unknown key or wrong value type
    pub fn parse(key: &str, value: &serde_json::Value) -> Result<Self, AppError> {
        if let Some(feature_key) = key.strip_prefix("features.") {
            let Some(feature) = FeatureName::from_key(feature_key) else {
                return Err(AppError::BadRequest(format!(
                    "Unknown feature: {}",
                    feature_key
                )));
            };
            return Ok(Self::Feature(feature, expect_bool(key, value)?));
        }

        match key {
            "prefix" => {
                let prefix = expect_string(key, value)?;
                if prefix.is_empty() {
                    return Err(AppError::BadRequest("Prefix cannot be empty".to_string()));
                }
                Ok(Self::Prefix(prefix))
            }
            "error_logging" => Ok(Self::ErrorLogging(expect_bool(key, value)?)),
            "status_message" => Ok(Self::StatusMessage(expect_string(key, value)?)),
            "mod_log_channel_id" => Ok(Self::ModLogChannelId(expect_optional_id(key, value)?)),
            "muted_role_id" => Ok(Self::MutedRoleId(expect_optional_id(key, value)?)),
            "ticket_category_id" => Ok(Self::TicketCategoryId(expect_optional_id(key, value)?)),
            "staff_role_id" => Ok(Self::StaffRoleId(expect_optional_id(key, value)?)),
            _ => Err(AppError::BadRequest(format!("Unknown config key: {}", key))),
        }
    }
}

fn expect_bool(key: &str, value: &serde_json::Value) -> Result<bool, AppError> {
    value
        .as_bool()
        .ok_or_else(|| AppError::BadRequest(format!("Expected a boolean for '{}'", key)))
}

fn expect_string(key: &str, value: &serde_json::Value) -> Result<String, AppError> {
    value
        .as_str()
        .map(|s| s.to_string())
        .ok_or_else(|| AppError::BadRequest(format!("Expected a string for '{}'", key)))
}

fn expect_optional_id(key: &str, value: &serde_json::Value) -> Result<Option<String>, AppError> {
    if value.is_null() {
        return Ok(None);
    }

    let id = expect_string(key, value)?;
    if id.is_empty() {
        return Ok(None);
    }

    Ok(Some(id))
}

/// Converts a guild config entity into its dashboard DTO.
impl From<entity::guild_config::Model> for GuildConfigDto {
    fn from(entity: entity::guild_config::Model) -> Self {
        Self {
            guild_id: entity.guild_id,
            prefix: entity.prefix,
            error_logging: entity.error_logging,
            status_message: entity.status_message,
            mod_log_channel_id: entity.mod_log_channel_id,
            muted_role_id: entity.muted_role_id,
            ticket_category_id: entity.ticket_category_id,
            staff_role_id: entity.staff_role_id,
            ticket_count: entity.ticket_count,
            features: FeaturesDto {
                moderation: entity.feature_moderation,
                automod: entity.feature_automod,
                economy: entity.feature_economy,
                music: entity.feature_music,
                clear: entity.feature_clear,
                mute: entity.feature_mute,
                lockdown: entity.feature_lockdown,
                invite: entity.feature_invite,
                ping: entity.feature_ping,
                info: entity.feature_info,
            },
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_top_level_keys() {
        assert_eq!(
            ConfigUpdate::parse("prefix", &json!("!")).unwrap(),
            ConfigUpdate::Prefix("!".to_string())
        );
        assert_eq!(
            ConfigUpdate::parse("error_logging", &json!(false)).unwrap(),
            ConfigUpdate::ErrorLogging(false)
        );
        assert_eq!(
            ConfigUpdate::parse("status_message", &json!("On patrol")).unwrap(),
            ConfigUpdate::StatusMessage("On patrol".to_string())
        );
    }

    #[test]
    fn parses_feature_keys() {
        assert_eq!(
            ConfigUpdate::parse("features.music", &json!(false)).unwrap(),
            ConfigUpdate::Feature(FeatureName::Music, false)
        );
        assert_eq!(
            ConfigUpdate::parse("features.automod", &json!(true)).unwrap(),
            ConfigUpdate::Feature(FeatureName::Automod, true)
        );
    }

    #[test]
    fn nullable_ids_accept_null_and_empty() {
        assert_eq!(
            ConfigUpdate::parse("muted_role_id", &json!(null)).unwrap(),
            ConfigUpdate::MutedRoleId(None)
        );
        assert_eq!(
            ConfigUpdate::parse("muted_role_id", &json!("")).unwrap(),
            ConfigUpdate::MutedRoleId(None)
        );
        assert_eq!(
            ConfigUpdate::parse("mod_log_channel_id", &json!("123")).unwrap(),
            ConfigUpdate::ModLogChannelId(Some("123".to_string()))
        );
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(ConfigUpdate::parse("no_such_key", &json!("x")).is_err());
        assert!(ConfigUpdate::parse("features.no_such_flag", &json!(true)).is_err());
    }

    #[test]
    fn rejects_wrong_value_types() {
        assert!(ConfigUpdate::parse("prefix", &json!(5)).is_err());
        assert!(ConfigUpdate::parse("features.ping", &json!("yes")).is_err());
    }

    #[test]
    fn rejects_empty_prefix() {
        assert!(ConfigUpdate::parse("prefix", &json!("")).is_err());
    }
}
