use sea_orm::entity::prelude::*;

/// Per-guild bot configuration, lazily created with defaults on first access.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "guild_config")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub guild_id: String,
    pub prefix: String,
    pub error_logging: bool,
    pub status_message: String,
    pub mod_log_channel_id: Option<String>,
    pub muted_role_id: Option<String>,
    pub ticket_category_id: Option<String>,
    pub staff_role_id: Option<String>,
    /// Monotonically increasing counter used to name new tickets.
    pub ticket_count: i32,
    pub feature_moderation: bool,
    pub feature_automod: bool,
    pub feature_economy: bool,
    pub feature_music: bool,
    pub feature_clear: bool,
    pub feature_mute: bool,
    pub feature_lockdown: bool,
    pub feature_invite: bool,
    pub feature_ping: bool,
    pub feature_info: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
