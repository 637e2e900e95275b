use oauth2::{AuthorizationCode, TokenResponse};

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::{discord::OAuthUser, user::UpsertUserParam},
    service::auth::DiscordAuthService,
};

const DISCORD_USER_URL: &str = "https://discord.com/api/users/@me";

impl<'a> DiscordAuthService<'a> {
    /// Completes an OAuth login from the callback's authorization code.
    ///
    /// Exchanges the code for tokens, fetches the user's identity from
    /// Discord, and upserts the user row with the fresh tokens.
    ///
    /// # Arguments
    /// - `authorization_code` - Code from the OAuth callback query string
    ///
    /// # Returns
    /// - `Ok(Model)` - The logged-in user's row
    /// - `Err(AppError)` - Token exchange, Discord API, or database failure
    pub async fn callback(
        &self,
        authorization_code: String,
    ) -> Result<entity::user::Model, AppError> {
        let user_repo = UserRepository::new(self.db);

        let auth_code = AuthorizationCode::new(authorization_code);

        let token = self
            .oauth_client
            .exchange_code(auth_code)
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::TokenExchangeFailed(e.to_string()))?;

        let access_token = token.access_token().secret().clone();
        let refresh_token = token.refresh_token().map(|t| t.secret().clone());

        let user = self.fetch_discord_user(&access_token).await?;

        let new_user = user_repo
            .upsert(UpsertUserParam {
                discord_id: user.id,
                name: user.username,
                avatar_hash: user.avatar,
                access_token,
                refresh_token,
            })
            .await?;

        Ok(new_user)
    }

    /// Retrieves a Discord user's information using provided access token
    async fn fetch_discord_user(&self, access_token: &str) -> Result<OAuthUser, AppError> {
        let user_info = self
            .http_client
            .get(DISCORD_USER_URL)
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await?
            .json::<OAuthUser>()
            .await?;

        Ok(user_info)
    }
}
