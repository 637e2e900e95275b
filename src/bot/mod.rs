//! Discord bot integration for moderation, automod and chat commands.
//!
//! The bot is initialized during startup and runs in a separate tokio task so
//! it never blocks the HTTP server. Its HTTP client and gateway cache are
//! shared with the dashboard API and the mute sweeper, so embeds and timeout
//! reversals go out over the same connection.
//!
//! # Gateway Intents
//!
//! - `GUILDS` - Guild availability and membership of the bot itself
//! - `GUILD_MESSAGES` - Message events for automod and command dispatch
//! - `MESSAGE_CONTENT` - Message text (privileged intent)
//! - `GUILD_MEMBERS` - Join events for the welcome system (privileged intent)
//!
//! The privileged intents must be enabled in the Discord Developer Portal for
//! the bot application.

pub mod command;
pub mod handler;
pub mod start;
