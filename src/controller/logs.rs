use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    controller::param::LimitParam,
    data::command_log::CommandLogRepository,
    error::AppError,
    middleware::auth::GuildAccessGuard,
    model::api::{CommandLogDto, ErrorDto},
    state::AppState,
};

/// Tag for grouping command log endpoints in OpenAPI documentation
pub static LOGS_TAG: &str = "logs";

/// Get recent command logs for a guild.
///
/// Returns the most recent command invocations, newest first. The `limit`
/// query parameter defaults to 50 and is capped at 200.
///
/// # Access Control
/// - Caller must manage the guild and the bot must be a member
///
/// # Returns
/// - `200 OK` - Recent command logs
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Caller does not manage the guild
/// - `404 Not Found` - Bot is not in the guild
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/logs/{guild_id}",
    tag = LOGS_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("limit" = Option<u64>, Query, description = "Maximum rows to return (default: 50, max: 200)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved command logs", body = Vec<CommandLogDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller does not manage this guild", body = ErrorDto),
        (status = 404, description = "Bot is not in the guild", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_logs(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
    Query(params): Query<LimitParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = GuildAccessGuard::new(&state, &session)
        .require(guild_id)
        .await?;

    let logs = CommandLogRepository::new(&state.db)
        .get_recent(&guild_id.to_string(), params.effective())
        .await?;

    let dtos: Vec<CommandLogDto> = logs.into_iter().map(CommandLogDto::from).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
