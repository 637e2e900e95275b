use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    data::automod_config::AutomodConfigRepository,
    error::AppError,
    middleware::auth::GuildAccessGuard,
    model::{
        api::{AutomodConfigDto, ErrorDto, UpdateAutomodDto},
        automod::UpdateAutomodParams,
    },
    state::AppState,
};

/// Tag for grouping automod endpoints in OpenAPI documentation
pub static AUTOMOD_TAG: &str = "automod";

/// Get a guild's automod policy.
///
/// Returns the stored policy with decoded word and whitelist arrays,
/// creating a disabled default policy on first access.
///
/// # Access Control
/// - Caller must manage the guild and the bot must be a member
///
/// # Returns
/// - `200 OK` - The guild's automod policy
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Caller does not manage the guild
/// - `404 Not Found` - Bot is not in the guild
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/automod/{guild_id}",
    tag = AUTOMOD_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved automod policy", body = AutomodConfigDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller does not manage this guild", body = ErrorDto),
        (status = 404, description = "Bot is not in the guild", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_automod(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    let _ = GuildAccessGuard::new(&state, &session)
        .require(guild_id)
        .await?;

    let policy = AutomodConfigRepository::new(&state.db)
        .get_or_create(&guild_id.to_string())
        .await?;

    Ok((StatusCode::OK, Json(policy.into_dto())))
}

/// Update a guild's automod policy.
///
/// Partial update: absent fields keep their stored value. Banned words are
/// normalized to lowercase and numeric thresholds must be at least 1.
///
/// # Access Control
/// - Caller must manage the guild and the bot must be a member
///
/// # Returns
/// - `200 OK` - The policy after the update
/// - `400 Bad Request` - A threshold is out of range
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Caller does not manage the guild
/// - `404 Not Found` - Bot is not in the guild
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/automod/{guild_id}",
    tag = AUTOMOD_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    request_body = UpdateAutomodDto,
    responses(
        (status = 200, description = "Successfully updated automod policy", body = AutomodConfigDto),
        (status = 400, description = "Invalid policy values", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller does not manage this guild", body = ErrorDto),
        (status = 404, description = "Bot is not in the guild", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_automod(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
    Json(payload): Json<UpdateAutomodDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = GuildAccessGuard::new(&state, &session)
        .require(guild_id)
        .await?;

    let params = UpdateAutomodParams::from(payload);
    params.validate()?;

    let policy = AutomodConfigRepository::new(&state.db)
        .update(&guild_id.to_string(), params)
        .await?;

    Ok((StatusCode::OK, Json(policy.into_dto())))
}
