use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    service::auth::DiscordAuthService,
    state::AppState,
};

/// Guard requiring a logged-in user.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the session to a user row.
    ///
    /// # Returns
    /// - `Ok(Model)` - The logged-in user
    /// - `Err(AppError::AuthErr)` - No session user, or the session's user
    ///   row no longer exists
    pub async fn require(&self) -> Result<entity::user::Model, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        Ok(user)
    }
}

/// Guard requiring a logged-in user who administers a specific guild.
///
/// Every guild-scoped dashboard route runs this: login first, then the
/// user's live Discord guild list must show owner, ADMINISTRATOR or
/// MANAGE_GUILD on the target guild, and the bot must be in that guild.
pub struct GuildAccessGuard<'a> {
    state: &'a AppState,
    session: &'a Session,
}

impl<'a> GuildAccessGuard<'a> {
    pub fn new(state: &'a AppState, session: &'a Session) -> Self {
        Self { state, session }
    }

    /// Resolves the session and checks guild access.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the request targets
    ///
    /// # Returns
    /// - `Ok(Model)` - The logged-in user, verified for this guild
    /// - `Err(AppError::AuthErr)` - Not logged in, not a manager of the
    ///   guild, or the bot is not in the guild
    pub async fn require(&self, guild_id: u64) -> Result<entity::user::Model, AppError> {
        let user = AuthGuard::new(&self.state.db, self.session).require().await?;

        DiscordAuthService::new(
            &self.state.db,
            &self.state.http_client,
            &self.state.oauth_client,
        )
        .ensure_guild_admin(&user, guild_id, &self.state.discord_cache)
        .await?;

        Ok(user)
    }
}
