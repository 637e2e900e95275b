use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    data::guild_config::GuildConfigRepository,
    error::AppError,
    middleware::auth::GuildAccessGuard,
    model::{
        api::{ConfigUpdateDto, ErrorDto, GuildConfigDto},
        guild_config::ConfigUpdate,
    },
    state::AppState,
};

/// Tag for grouping guild config endpoints in OpenAPI documentation
pub static CONFIG_TAG: &str = "config";

/// Get a guild's configuration.
///
/// Returns the guild's stored settings and feature flags, creating the row
/// with defaults on first access.
///
/// # Access Control
/// - Caller must manage the guild and the bot must be a member
///
/// # Returns
/// - `200 OK` - The guild's configuration
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Caller does not manage the guild
/// - `404 Not Found` - Bot is not in the guild
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/config/{guild_id}",
    tag = CONFIG_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved configuration", body = GuildConfigDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller does not manage this guild", body = ErrorDto),
        (status = 404, description = "Bot is not in the guild", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_config(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    let _ = GuildAccessGuard::new(&state, &session)
        .require(guild_id)
        .await?;

    let config = GuildConfigRepository::new(&state.db)
        .get_or_create(&guild_id.to_string())
        .await?;

    Ok((StatusCode::OK, Json(GuildConfigDto::from(config))))
}

/// Apply one keyed update to a guild's configuration.
///
/// The body carries a key (`prefix`, `status_message`, `features.<name>`,
/// ...) and a JSON value. The pair is parsed into a typed update; unknown
/// keys and wrongly-typed values are rejected.
///
/// # Access Control
/// - Caller must manage the guild and the bot must be a member
///
/// # Returns
/// - `200 OK` - The configuration after the update
/// - `400 Bad Request` - Unknown key or invalid value
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Caller does not manage the guild
/// - `404 Not Found` - Bot is not in the guild
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/config/{guild_id}",
    tag = CONFIG_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    request_body = ConfigUpdateDto,
    responses(
        (status = 200, description = "Successfully updated configuration", body = GuildConfigDto),
        (status = 400, description = "Unknown key or invalid value", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller does not manage this guild", body = ErrorDto),
        (status = 404, description = "Bot is not in the guild", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_config(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
    Json(payload): Json<ConfigUpdateDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = GuildAccessGuard::new(&state, &session)
        .require(guild_id)
        .await?;

    let update = ConfigUpdate::parse(&payload.key, &payload.value)?;

    let config = GuildConfigRepository::new(&state.db)
        .apply_update(&guild_id.to_string(), update)
        .await?;

    Ok((StatusCode::OK, Json(GuildConfigDto::from(config))))
}
