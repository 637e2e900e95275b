//! Data transfer objects exchanged with the dashboard API.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Aggregate bot statistics for a guild dashboard.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct StatsDto {
    /// Seconds since the process started.
    pub uptime_seconds: u64,
    /// Number of guilds the bot is currently in.
    pub guilds: u64,
    /// Total members across cached guilds.
    pub users: u64,
    /// Commands logged for this guild since the process started.
    pub commands_run: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CommandLogDto {
    pub id: i32,
    pub command: String,
    pub user_tag: String,
    pub success: bool,
    pub timestamp: String,
}

impl From<entity::command_log::Model> for CommandLogDto {
    fn from(model: entity::command_log::Model) -> Self {
        Self {
            id: model.id,
            command: model.command,
            user_tag: model.user_tag,
            success: model.success,
            timestamp: model.created_at.to_rfc3339(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ViolationDto {
    pub id: i32,
    pub user_id: String,
    pub reason: String,
    pub content: String,
    pub timestamp: String,
}

impl From<entity::violation::Model> for ViolationDto {
    fn from(model: entity::violation::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            reason: model.reason,
            content: model.content,
            timestamp: model.created_at.to_rfc3339(),
        }
    }
}

/// Per-guild feature flags as exposed to the dashboard.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct FeaturesDto {
    pub moderation: bool,
    pub automod: bool,
    pub economy: bool,
    pub music: bool,
    pub clear: bool,
    pub mute: bool,
    pub lockdown: bool,
    pub invite: bool,
    pub ping: bool,
    pub info: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct GuildConfigDto {
    pub guild_id: String,
    pub prefix: String,
    pub error_logging: bool,
    pub status_message: String,
    pub mod_log_channel_id: Option<String>,
    pub muted_role_id: Option<String>,
    pub ticket_category_id: Option<String>,
    pub staff_role_id: Option<String>,
    pub ticket_count: i32,
    pub features: FeaturesDto,
}

/// A single keyed config mutation from the dashboard.
///
/// The `key` is either a top-level config field (`prefix`, `status_message`,
/// ...) or a feature toggle in the form `features.<name>`. The raw JSON value
/// is parsed into a typed update at the controller boundary; unknown keys are
/// rejected with 400.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ConfigUpdateDto {
    pub key: String,
    #[schema(value_type = Object)]
    pub value: serde_json::Value,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct AutomodConfigDto {
    pub enabled: bool,
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

/// Partial automod update; absent fields keep their stored value.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateAutomodDto {
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

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct WelcomeConfigDto {
    pub enabled: bool,
    pub channel_id: Option<String>,
    pub title: String,
    pub description: String,
    pub color: String,
    pub footer: Option<String>,
    pub show_avatar: bool,
    pub image: Option<String>,
}

/// Partial welcome update; absent fields keep their stored value. For the
/// nullable columns an empty string clears the value.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateWelcomeDto {
    pub enabled: Option<bool>,
    pub channel_id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub footer: Option<String>,
    pub show_avatar: Option<bool>,
    pub image: Option<String>,
}

/// A guild the caller can manage through the dashboard.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct GuildDto {
    pub id: String,
    pub name: String,
    pub icon: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UserDto {
    pub discord_id: String,
    pub name: String,
    pub avatar_hash: Option<String>,
}
