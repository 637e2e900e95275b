use sea_orm::entity::prelude::*;

/// Per-guild auto-moderation policy.
///
/// The `banned_words`, `whitelist_roles` and `whitelist_members` columns hold
/// JSON arrays serialized as text; the data layer converts them to typed
/// collections at the repository boundary.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "automod_config")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub guild_id: String,
    pub enabled: bool,
    #[sea_orm(column_type = "Text")]
    pub banned_words: String,
    pub warn_on_violation: bool,
    pub mute_on_violation: bool,
    pub warnings_before_mute: i32,
    pub warning_expiry_hours: i32,
    pub mute_duration_minutes: i32,
    pub delete_messages: bool,
    #[sea_orm(column_type = "Text")]
    pub whitelist_roles: String,
    #[sea_orm(column_type = "Text")]
    pub whitelist_members: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
