mod bot;
mod config;
mod controller;
mod data;
mod error;
mod middleware;
mod model;
mod router;
mod scheduler;
mod service;
mod startup;
mod state;
mod util;

use std::{sync::Arc, time::Instant};

use tracing_subscriber::EnvFilter;

use crate::{
    config::Config, error::AppError, scheduler::mute_sweeper, service::music::MusicRegistry,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&config).await?;
    let http_client = startup::setup_reqwest_client()?;
    let oauth_client = startup::setup_oauth_client(&config)?;

    let music = Arc::new(MusicRegistry::new());
    let started_at = Instant::now();

    tracing::info!("Starting server");

    // Initialize Discord bot and extract its HTTP client and cache
    let (bot_client, discord_http, discord_cache) =
        bot::start::init_bot(&config, db.clone(), music.clone(), started_at).await?;

    // Start Discord bot in a separate task
    tokio::spawn(async move {
        if let Err(e) = bot::start::start_bot(bot_client).await {
            tracing::error!("Discord bot error: {}", e);
        }
    });

    // Start mute sweeper scheduler
    let sweeper_db = db.clone();
    let sweeper_http = discord_http.clone();
    tokio::spawn(async move {
        if let Err(e) = mute_sweeper::start_scheduler(sweeper_db, sweeper_http).await {
            tracing::error!("Mute sweeper scheduler error: {}", e);
        }
    });

    let app = router::router(&config)
        .with_state(AppState::new(
            db,
            http_client,
            oauth_client,
            discord_http,
            discord_cache,
        ))
        .layer(session);

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Dashboard API listening on {}", config.bind_address);
    axum::serve(listener, app).await?;

    Ok(())
}
