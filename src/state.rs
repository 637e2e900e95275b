//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources
//! and dependencies needed by the dashboard API. The state is initialized once
//! during startup and then cloned for each request handler through Axum's
//! state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - HTTP client for external API requests
//! - OAuth2 client for Discord authentication
//! - Discord HTTP client and gateway cache for bot operations
//! - Process start instant for uptime reporting

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;
use serenity::cache::Cache;
use serenity::http::Http;
use std::sync::Arc;
use std::time::Instant;

/// Type alias for the OAuth2 client configured for Discord authentication.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Application state containing shared resources and dependencies.
///
/// Initialized once during server startup and cloned (cheaply, as every field
/// is a pool, `Arc`, or clone-friendly client) for each incoming request via
/// Axum's state extraction.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for making external API requests.
    ///
    /// Configured with security settings (no redirects) to prevent SSRF
    /// vulnerabilities. Used for Discord OAuth API calls.
    pub http_client: reqwest::Client,

    /// OAuth2 client for the Discord authentication flow.
    pub oauth_client: OAuth2Client,

    /// Discord HTTP client for bot API operations.
    pub discord_http: Arc<Http>,

    /// Discord gateway cache, shared with the running bot.
    ///
    /// Used to check bot guild membership and to aggregate guild and member
    /// counts for the stats endpoint.
    pub discord_cache: Arc<Cache>,

    /// When the process started, for uptime reporting.
    pub started_at: Instant,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// Called once during server startup after all dependencies have been
    /// initialized. The resulting state is then provided to the Axum router
    /// for use in request handlers.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `http_client` - HTTP client for external API requests
    /// - `oauth_client` - OAuth2 client for Discord authentication
    /// - `discord_http` - Discord HTTP client for bot operations
    /// - `discord_cache` - Gateway cache shared with the bot
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        discord_http: Arc<Http>,
        discord_cache: Arc<Cache>,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            discord_http,
            discord_cache,
            started_at: Instant::now(),
        }
    }
}
