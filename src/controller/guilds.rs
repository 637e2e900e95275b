use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    error::AppError,
    middleware::auth::AuthGuard,
    model::api::{ErrorDto, GuildDto},
    service::auth::DiscordAuthService,
    state::AppState,
};

/// Tag for grouping guild picker endpoints in OpenAPI documentation
pub static GUILDS_TAG: &str = "guilds";

/// List guilds the caller can manage through the dashboard.
///
/// Fetches the caller's guilds from Discord with their stored access token
/// and filters to guilds where they hold owner, ADMINISTRATOR or MANAGE_GUILD
/// standing and the bot is a member.
///
/// # Returns
/// - `200 OK` - Manageable guilds
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Discord API or database error
#[utoipa::path(
    get,
    path = "/api/guilds",
    tag = GUILDS_TAG,
    responses(
        (status = 200, description = "Successfully retrieved manageable guilds", body = Vec<GuildDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_guilds(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let guilds = DiscordAuthService::new(&state.db, &state.http_client, &state.oauth_client)
        .manageable_guilds(&user, &state.discord_cache)
        .await?;

    let dtos: Vec<GuildDto> = guilds.into_iter().map(|g| g.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
