use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No authenticated user ID in the session.
    ///
    /// The request requires a logged-in user but the session contains no user
    /// identifier. Results in a 401 Unauthorized response.
    #[error("No authenticated user found in session")]
    UserNotInSession,

    /// Session references a user that no longer exists.
    ///
    /// The session contains a user ID but no matching row exists in the user
    /// table, typically after the user record was removed while a session was
    /// still live. Results in a 401 Unauthorized response.
    #[error("User with session ID {0} not found in database")]
    UserNotInDatabase(i32),

    /// CSRF state validation failed during OAuth callback.
    ///
    /// The CSRF state token in the OAuth callback URL does not match the token stored
    /// in the session, indicating a potential CSRF attack or an invalid callback request.
    /// Results in a 400 Bad Request response.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// OAuth authorization code exchange failed.
    ///
    /// Discord rejected the token exchange request, typically due to an expired
    /// or reused authorization code. Results in a 500 Internal Server Error with
    /// a generic message returned to the client.
    #[error("Failed to exchange OAuth authorization code: {0}")]
    TokenExchangeFailed(String),

    /// User lacks administrative rights on the requested guild.
    ///
    /// The authenticated user is not the guild owner and holds neither
    /// ADMINISTRATOR nor MANAGE_GUILD permissions in that guild, verified
    /// against their live Discord guild list. Results in a 403 Forbidden response.
    #[error("User {user_id} does not manage guild {guild_id}")]
    GuildAccessDenied {
        /// Discord ID of the requesting user
        user_id: String,
        /// Discord ID of the guild that was requested
        guild_id: u64,
    },

    /// The bot is not a member of the requested guild.
    ///
    /// Guild-scoped dashboard routes only serve guilds the bot can act on.
    /// Results in a 404 Not Found response.
    #[error("Bot is not a member of guild {0}")]
    BotNotInGuild(u64),
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and user-friendly
/// error messages. All errors are logged at debug level for diagnostics while
/// keeping client-facing messages generic to avoid information leakage.
///
/// # Returns
/// - 400 Bad Request - For CSRF failures
/// - 401 Unauthorized - For missing or stale sessions
/// - 403 Forbidden - For guild access refusals
/// - 404 Not Found - For guilds the bot is not in
/// - 500 Internal Server Error - For OAuth token exchange failures
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("Auth error: {}", self);

        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "You must be logged in to do that.".to_string(),
                }),
            )
                .into_response(),
            Self::CsrfValidationFailed => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "There was an issue logging you in, please try again.".to_string(),
                }),
            )
                .into_response(),
            Self::GuildAccessDenied { .. } => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "You don't manage this server.".to_string(),
                }),
            )
                .into_response(),
            Self::BotNotInGuild(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: "Server not found.".to_string(),
                }),
            )
                .into_response(),
            Self::TokenExchangeFailed(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorDto {
                    error: "Internal server error".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
