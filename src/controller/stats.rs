use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    error::AppError,
    middleware::auth::GuildAccessGuard,
    model::api::{ErrorDto, StatsDto},
    service::stats::StatsService,
    state::AppState,
};

/// Tag for grouping stats endpoints in OpenAPI documentation
pub static STATS_TAG: &str = "stats";

/// Get bot statistics for a guild dashboard.
///
/// Returns uptime, guild and member totals from the gateway cache, and the
/// guild's all-time command count.
///
/// # Access Control
/// - Caller must manage the guild and the bot must be a member
///
/// # Returns
/// - `200 OK` - Aggregated statistics
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Caller does not manage the guild
/// - `404 Not Found` - Bot is not in the guild
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/stats/{guild_id}",
    tag = STATS_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved statistics", body = StatsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller does not manage this guild", body = ErrorDto),
        (status = 404, description = "Bot is not in the guild", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_stats(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    let _ = GuildAccessGuard::new(&state, &session)
        .require(guild_id)
        .await?;

    let stats = StatsService::new(&state.db)
        .guild_stats(
            &guild_id.to_string(),
            state.started_at.elapsed().as_secs(),
            &state.discord_cache,
        )
        .await?;

    Ok((StatusCode::OK, Json(stats)))
}
