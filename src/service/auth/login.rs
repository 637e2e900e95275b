use oauth2::{CsrfToken, Scope};
use url::Url;

use crate::service::auth::DiscordAuthService;

impl<'a> DiscordAuthService<'a> {
    /// Builds the Discord authorization URL for a new login attempt.
    ///
    /// Requests the `identify` and `guilds` scopes so the dashboard can show
    /// the user's name and filter guilds down to ones they manage.
    ///
    /// # Returns
    /// - `(Url, CsrfToken)` - The redirect target and the CSRF state to stash
    ///   in the session for callback validation
    pub fn login_url(&self) -> (Url, CsrfToken) {
        let (authorize_url, csrf_state) = self
            .oauth_client
            .authorize_url(|| CsrfToken::new_random())
            .add_scope(Scope::new("identify".to_string()))
            .add_scope(Scope::new("guilds".to_string()))
            .url();

        (authorize_url, csrf_state)
    }
}
