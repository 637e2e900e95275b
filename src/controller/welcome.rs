use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    data::welcome_config::WelcomeConfigRepository,
    error::AppError,
    middleware::auth::GuildAccessGuard,
    model::{
        api::{ErrorDto, UpdateWelcomeDto, WelcomeConfigDto},
        welcome::UpdateWelcomeParams,
    },
    state::AppState,
};

/// Tag for grouping welcome endpoints in OpenAPI documentation
pub static WELCOME_TAG: &str = "welcome";

/// Get a guild's welcome message configuration.
///
/// Creates a disabled default configuration on first access.
///
/// # Access Control
/// - Caller must manage the guild and the bot must be a member
///
/// # Returns
/// - `200 OK` - The guild's welcome configuration
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Caller does not manage the guild
/// - `404 Not Found` - Bot is not in the guild
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/welcome/{guild_id}",
    tag = WELCOME_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved welcome configuration", body = WelcomeConfigDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller does not manage this guild", body = ErrorDto),
        (status = 404, description = "Bot is not in the guild", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_welcome(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    let _ = GuildAccessGuard::new(&state, &session)
        .require(guild_id)
        .await?;

    let config = WelcomeConfigRepository::new(&state.db)
        .get_or_create(&guild_id.to_string())
        .await?;

    Ok((StatusCode::OK, Json(WelcomeConfigDto::from(config))))
}

/// Update a guild's welcome message configuration.
///
/// Partial update: absent fields keep their stored value. For the nullable
/// fields (`channel_id`, `footer`, `image`) an empty string clears the value.
///
/// # Access Control
/// - Caller must manage the guild and the bot must be a member
///
/// # Returns
/// - `200 OK` - The configuration after the update
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Caller does not manage the guild
/// - `404 Not Found` - Bot is not in the guild
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/welcome/{guild_id}",
    tag = WELCOME_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    request_body = UpdateWelcomeDto,
    responses(
        (status = 200, description = "Successfully updated welcome configuration", body = WelcomeConfigDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller does not manage this guild", body = ErrorDto),
        (status = 404, description = "Bot is not in the guild", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_welcome(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
    Json(payload): Json<UpdateWelcomeDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = GuildAccessGuard::new(&state, &session)
        .require(guild_id)
        .await?;

    let config = WelcomeConfigRepository::new(&state.db)
        .update(&guild_id.to_string(), UpdateWelcomeParams::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(WelcomeConfigDto::from(config))))
}
