use serenity::all::GuildId;
use serenity::cache::Cache;

use crate::{
    error::{auth::AuthError, AppError},
    model::discord::OAuthGuild,
    service::auth::DiscordAuthService,
};

const DISCORD_USER_GUILDS_URL: &str = "https://discord.com/api/users/@me/guilds";

impl<'a> DiscordAuthService<'a> {
    /// Fetches the guilds the user belongs to from Discord.
    ///
    /// Uses the access token stored at login. A 401 here means the token
    /// expired; the user has to log in again.
    ///
    /// # Arguments
    /// - `user` - The logged-in user's row
    ///
    /// # Returns
    /// - `Ok(Vec<OAuthGuild>)` - The user's guild list with permission bits
    /// - `Err(AppError)` - Discord API failure
    pub async fn fetch_user_guilds(
        &self,
        user: &entity::user::Model,
    ) -> Result<Vec<OAuthGuild>, AppError> {
        let guilds = self
            .http_client
            .get(DISCORD_USER_GUILDS_URL)
            .header("Authorization", format!("Bearer {}", user.access_token))
            .send()
            .await?
            .json::<Vec<OAuthGuild>>()
            .await?;

        Ok(guilds)
    }

    /// Guilds the user manages that the bot is also a member of.
    ///
    /// This is the guild picker list: only guilds where the dashboard can
    /// actually read and write settings are shown.
    pub async fn manageable_guilds(
        &self,
        user: &entity::user::Model,
        cache: &Cache,
    ) -> Result<Vec<OAuthGuild>, AppError> {
        let guilds = self.fetch_user_guilds(user).await?;

        let bot_guilds = cache.guilds();

        Ok(guilds
            .into_iter()
            .filter(|g| g.can_manage())
            .filter(|g| {
                g.id.parse::<u64>()
                    .is_ok_and(|id| bot_guilds.contains(&GuildId::new(id)))
            })
            .collect())
    }

    /// Verifies the user may administer a guild through the dashboard.
    ///
    /// Checks the user's live Discord guild list for owner, ADMINISTRATOR or
    /// MANAGE_GUILD standing, and checks the bot is present in the guild.
    ///
    /// # Arguments
    /// - `user` - The logged-in user's row
    /// - `guild_id` - Guild the request targets
    /// - `cache` - Gateway cache, for bot membership
    ///
    /// # Returns
    /// - `Ok(())` - Access granted
    /// - `Err(AppError)` - `BotNotInGuild`, `GuildAccessDenied`, or a Discord
    ///   API failure fetching the guild list
    pub async fn ensure_guild_admin(
        &self,
        user: &entity::user::Model,
        guild_id: u64,
        cache: &Cache,
    ) -> Result<(), AppError> {
        if !cache.guilds().contains(&GuildId::new(guild_id)) {
            return Err(AuthError::BotNotInGuild(guild_id).into());
        }

        let guilds = self.fetch_user_guilds(user).await?;

        let manages = guilds
            .iter()
            .any(|g| g.id == guild_id.to_string() && g.can_manage());

        if !manages {
            return Err(AuthError::GuildAccessDenied {
                user_id: user.discord_id.clone(),
                guild_id,
            }
            .into());
        }

        Ok(())
    }
}
