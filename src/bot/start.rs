use sea_orm::DatabaseConnection;
use serenity::all::{Client, GatewayIntents};
use serenity::cache::Cache;
use serenity::http::Http;
use std::sync::Arc;
use std::time::Instant;

use crate::{
    bot::handler::Handler, config::Config, error::AppError, service::music::MusicRegistry,
};

/// Builds the Discord client without starting it.
///
/// The client's HTTP handle and gateway cache are extracted here so the
/// dashboard API and the mute sweeper can share them while the gateway
/// connection runs in its own task.
///
/// # Arguments
/// - `config` - Application configuration containing the bot token
/// - `db` - Database connection for the event handler
/// - `music` - Shared music queue registry
/// - `started_at` - Process start instant for the uptime command
///
/// # Returns
/// - `Ok((Client, Arc<Http>, Arc<Cache>))` - Ready-to-start client plus
///   shared handles
/// - `Err(AppError)` - Client construction failed
pub async fn init_bot(
    config: &Config,
    db: DatabaseConnection,
    music: Arc<MusicRegistry>,
    started_at: Instant,
) -> Result<(Client, Arc<Http>, Arc<Cache>), AppError> {
    // MESSAGE_CONTENT and GUILD_MEMBERS are privileged intents - they must be
    // enabled in the Discord Developer Portal
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_MEMBERS;

    let handler = Handler::new(db, music, started_at);

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    let http = client.http.clone();
    let cache = client.cache.clone();

    Ok((client, http, cache))
}

/// Runs the gateway connection until shutdown.
///
/// # Arguments
/// - `client` - Client from [`init_bot`]
///
/// # Returns
/// - `Ok(())` - Clean shutdown
/// - `Err(AppError)` - Gateway connection failed
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
