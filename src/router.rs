use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::cors::CorsLayer;

use crate::{
    config::Config,
    controller::{
        auth::{callback, get_user, login, logout},
        automod::{get_automod, update_automod},
        guild_config::{get_config, update_config},
        guilds::get_guilds,
        logs::get_logs,
        stats::get_stats,
        violations::get_violations,
        welcome::{get_welcome, update_welcome},
    },
    state::AppState,
};

pub fn router(config: &Config) -> Router<AppState> {
    let mut router = Router::new()
        .route("/api/auth/login", get(login))
        .route("/api/auth/callback", get(callback))
        .route("/api/auth/logout", get(logout))
        .route("/api/auth/user", get(get_user))
        .route("/api/guilds", get(get_guilds))
        .route("/api/stats/{guild_id}", get(get_stats))
        .route("/api/logs/{guild_id}", get(get_logs))
        .route("/api/violations/{guild_id}", get(get_violations))
        .route(
            "/api/config/{guild_id}",
            get(get_config).post(update_config),
        )
        .route(
            "/api/automod/{guild_id}",
            get(get_automod).post(update_automod),
        )
        .route(
            "/api/welcome/{guild_id}",
            get(get_welcome).post(update_welcome),
        );

    // Sessions ride on cookies, so cross-origin dashboards need an explicit
    // origin with credentials rather than a wildcard.
    if let Some(origin) = &config.dashboard_origin {
        if let Ok(origin) = origin.parse::<HeaderValue>() {
            router = router.layer(
                CorsLayer::new()
                    .allow_origin(origin)
                    .allow_methods([Method::GET, Method::POST])
                    .allow_headers([header::CONTENT_TYPE])
                    .allow_credentials(true),
            );
        } else {
            tracing::warn!("Ignoring invalid DASHBOARD_ORIGIN value");
        }
    }

    router
}
