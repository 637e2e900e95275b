use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::{sqlx::SqlitePool, SqliteStore};

use crate::{
    config::Config,
    error::AppError,
    state::OAuth2Client,
};

/// How long an idle session stays valid.
const SESSION_EXPIRY_DAYS: i64 = 7;

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Sets up cookie-backed sessions stored in the Sqlite database.
///
/// The session store pins its own sqlx major, so it connects through a pool
/// of its own rather than sharing SeaORM's. Sessions expire after seven days
/// of inactivity.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer ready to attach to the router
/// - `Err(AppError)` - Failed to connect or run the session store migration
pub async fn connect_to_session(
    config: &Config,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = SqlitePool::connect(&config.database_url).await?;
    let store = SqliteStore::new(pool);
    store.migrate().await?;

    let layer = SessionManagerLayer::new(store)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::days(
            SESSION_EXPIRY_DAYS,
        )));

    Ok(layer)
}

/// Builds the HTTP client used for Discord OAuth API calls.
///
/// Redirects are disabled to prevent SSRF via attacker-controlled redirect
/// chains.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Configured client
/// - `Err(AppError)` - Client construction failed
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Builds the OAuth2 client for Discord authentication.
///
/// # Arguments
/// - `config` - Application configuration with the Discord OAuth credentials
///
/// # Returns
/// - `Ok(OAuth2Client)` - Client with auth, token and redirect endpoints set
/// - `Err(AppError)` - A configured URL failed to parse
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let auth_url = AuthUrl::new(config.discord_auth_url.clone())
        .map_err(|e| AppError::InternalError(format!("Invalid Discord auth URL: {e}")))?;
    let token_url = TokenUrl::new(config.discord_token_url.clone())
        .map_err(|e| AppError::InternalError(format!("Invalid Discord token URL: {e}")))?;
    let redirect_url = RedirectUrl::new(config.discord_redirect_url.clone())
        .map_err(|e| AppError::InternalError(format!("Invalid OAuth redirect URL: {e}")))?;

    let client = BasicClient::new(ClientId::new(config.discord_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.discord_client_secret.clone()))
        .set_auth_uri(auth_url)
        .set_token_uri(token_url)
        .set_redirect_uri(redirect_url);

    Ok(client)
}

#[cfg(test)]
mod test {
    use super::*;

    /// Tests the session store on a pool built from its own sqlx.
    ///
    /// Expected: connect and migrate both succeed against in-memory Sqlite
    #[tokio::test]
    async fn session_store_migrates_on_its_own_pool() -> Result<(), AppError> {
        let pool = SqlitePool::connect("sqlite::memory:").await?;

        let store = SqliteStore::new(pool);
        store.migrate().await?;

        Ok(())
    }
}
