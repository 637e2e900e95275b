//! Dashboard user parameter types.

use crate::model::api::UserDto;

/// Parameters for upserting a dashboard user on OAuth login.
///
/// Created from the Discord `/users/@me` response plus the token exchange
/// result. The access token is stored so guild-scoped dashboard requests can
/// check the user's live guild list.
#[derive(Debug, Clone)]
pub struct UpsertUserParam {
    /// Discord ID of the user
    pub discord_id: String,
    /// Display name of the user.
    pub name: String,
    /// Avatar hash, if the user has one set.
    pub avatar_hash: Option<String>,
    /// OAuth access token from the latest login.
    pub access_token: String,
    /// OAuth refresh token, when Discord issued one.
    pub refresh_token: Option<String>,
}

/// Converts a user entity into its dashboard DTO. Tokens never leave the server.
impl From<entity::user::Model> for UserDto {
    fn from(entity: entity::user::Model) -> Self {
        Self {
            discord_id: entity.discord_id,
            name: entity.name,
            avatar_hash: entity.avatar_hash,
        }
    }
}
