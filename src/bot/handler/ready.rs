//! Ready event handler for bot initialization.
//!
//! Fires once per connection after the gateway handshake; used to log the
//! connection and set the presence.

use serenity::all::{ActivityData, Context, Ready};

use crate::data::guild_config::DEFAULT_STATUS_MESSAGE;

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `ctx` - Discord context for setting activity status
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    ctx.set_activity(Some(ActivityData::custom(DEFAULT_STATUS_MESSAGE)));
}
