//! Prefix command dispatch.
//!
//! The message handler strips the guild's prefix and hands the first token
//! here. Aliases resolve to canonical names; unknown tokens are a silent
//! no-op with no log entry. Every known command attempt is recorded as a
//! CommandLog row, and handler errors are caught at this boundary - logged,
//! recorded as failed, and answered with a generic failure reply.

use sea_orm::DatabaseConnection;
use serenity::all::{Context, Message, Permissions};
use std::time::Instant;

use crate::{
    data::command_log::CommandLogRepository,
    error::AppError,
    model::guild_config::FeatureName,
    service::music::MusicRegistry,
};

pub mod moderation;
pub mod music;
pub mod ticket;
pub mod utility;

/// Everything a command handler needs for one invocation.
pub struct CommandContext<'a> {
    pub db: &'a DatabaseConnection,
    pub serenity: &'a Context,
    pub msg: &'a Message,
    /// Tokens after the command word.
    pub args: &'a [&'a str],
    pub config: &'a entity::guild_config::Model,
    pub music: &'a MusicRegistry,
    pub started_at: Instant,
}

impl<'a> CommandContext<'a> {
    /// Sends a plain text reply to the invoking channel.
    pub async fn reply(&self, text: impl Into<String>) -> Result<(), AppError> {
        self.msg
            .channel_id
            .say(&self.serenity.http, text.into())
            .await?;
        Ok(())
    }

    /// Checks the command's feature flag, replying when it is disabled.
    ///
    /// # Returns
    /// - `Ok(true)` - Feature enabled, proceed
    /// - `Ok(false)` - Feature disabled; a notice was sent
    pub async fn require_feature(&self, feature: FeatureName) -> Result<bool, AppError> {
        if feature.is_enabled(self.config) {
            return Ok(true);
        }

        self.reply("That feature is disabled on this server.").await?;
        Ok(false)
    }

    /// Checks the invoking member's Discord permissions, replying on refusal.
    ///
    /// Permissions are computed from the cached guild member. A member the
    /// cache does not know is refused.
    ///
    /// # Returns
    /// - `Ok(true)` - Member holds all required permissions
    /// - `Ok(false)` - Refused; a notice was sent
    pub async fn require_permissions(&self, required: Permissions) -> Result<bool, AppError> {
        if self.member_permissions().is_some_and(|p| p.contains(required)) {
            return Ok(true);
        }

        self.reply("You don't have permission to use that command.")
            .await?;
        Ok(false)
    }

    fn member_permissions(&self) -> Option<Permissions> {
        let guild = self.serenity.cache.guild(self.msg.guild_id?)?;
        let member = guild.members.get(&self.msg.author.id)?;
        Some(guild.member_permissions(member))
    }
}

/// Canonical command names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandName {
    Kick,
    Ban,
    Clear,
    Mute,
    Unmute,
    Lockdown,
    Unlock,
    Slowmode,
    Nuke,
    Prefix,
    Setup,
    Ping,
    Help,
    Uptime,
    ServerInfo,
    UserInfo,
    Invite,
    Debug,
    Ticket,
    Play,
    Skip,
    Queue,
    NowPlaying,
    Stop,
}

impl CommandName {
    /// Resolves a lowercased token through the alias table.
    ///
    /// # Returns
    /// - `Some(CommandName)` - Known command or alias
    /// - `None` - Unknown token; the dispatcher stays silent
    pub fn resolve(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "kick" => Some(Self::Kick),
            "ban" => Some(Self::Ban),
            "clear" | "purge" => Some(Self::Clear),
            "mute" | "textmute" => Some(Self::Mute),
            "unmute" | "textunmute" => Some(Self::Unmute),
            "lockdown" => Some(Self::Lockdown),
            "unlock" => Some(Self::Unlock),
            "slowmode" => Some(Self::Slowmode),
            "nuke" => Some(Self::Nuke),
            "prefix" => Some(Self::Prefix),
            "setup" => Some(Self::Setup),
            "ping" => Some(Self::Ping),
            "help" => Some(Self::Help),
            "uptime" => Some(Self::Uptime),
            "serverinfo" => Some(Self::ServerInfo),
            "userinfo" => Some(Self::UserInfo),
            "invite" => Some(Self::Invite),
            "debug" => Some(Self::Debug),
            "ticket" => Some(Self::Ticket),
            "play" => Some(Self::Play),
            "skip" => Some(Self::Skip),
            "queue" => Some(Self::Queue),
            "nowplaying" | "np" => Some(Self::NowPlaying),
            "stop" => Some(Self::Stop),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Kick => "kick",
            Self::Ban => "ban",
            Self::Clear => "clear",
            Self::Mute => "mute",
            Self::Unmute => "unmute",
            Self::Lockdown => "lockdown",
            Self::Unlock => "unlock",
            Self::Slowmode => "slowmode",
            Self::Nuke => "nuke",
            Self::Prefix => "prefix",
            Self::Setup => "setup",
            Self::Ping => "ping",
            Self::Help => "help",
            Self::Uptime => "uptime",
            Self::ServerInfo => "serverinfo",
            Self::UserInfo => "userinfo",
            Self::Invite => "invite",
            Self::Debug => "debug",
            Self::Ticket => "ticket",
            Self::Play => "play",
            Self::Skip => "skip",
            Self::Queue => "queue",
            Self::NowPlaying => "nowplaying",
            Self::Stop => "stop",
        }
    }
}

/// Dispatches one command invocation.
///
/// Unknown tokens return silently. Known commands are run, logged with a
/// success flag, and shielded: a handler error never propagates past here.
pub async fn dispatch(ctx: CommandContext<'_>, first_token: &str) {
    let Some(command) = CommandName::resolve(first_token) else {
        return;
    };

    let result = run(command, &ctx).await;
    let success = result.is_ok();

    let guild_id = ctx.msg.guild_id.map(|g| g.to_string()).unwrap_or_default();
    if let Err(e) = CommandLogRepository::new(ctx.db)
        .create(&guild_id, command.as_str(), &ctx.msg.author.tag(), success)
        .await
    {
        tracing::error!("Failed to log command {}: {}", command.as_str(), e);
    }

    if let Err(e) = result {
        tracing::error!("Command {} failed: {}", command.as_str(), e);

        if let Err(e) = ctx
            .reply("Something went wrong running that command.")
            .await
        {
            tracing::debug!("Failed to send failure reply: {}", e);
        }
    }
}

async fn run(command: CommandName, ctx: &CommandContext<'_>) -> Result<(), AppError> {
    match command {
        CommandName::Kick => moderation::kick::kick(ctx).await,
        CommandName::Ban => moderation::ban::ban(ctx).await,
        CommandName::Clear => moderation::clear::clear(ctx).await,
        CommandName::Mute => moderation::mute::mute(ctx).await,
        CommandName::Unmute => moderation::unmute::unmute(ctx).await,
        CommandName::Lockdown => moderation::lockdown::lockdown(ctx).await,
        CommandName::Unlock => moderation::unlock::unlock(ctx).await,
        CommandName::Slowmode => moderation::slowmode::slowmode(ctx).await,
        CommandName::Nuke => moderation::nuke::nuke(ctx).await,
        CommandName::Prefix => utility::prefix::prefix(ctx).await,
        CommandName::Setup => utility::setup::setup(ctx).await,
        CommandName::Ping => utility::ping::ping(ctx).await,
        CommandName::Help => utility::help::help(ctx).await,
        CommandName::Uptime => utility::uptime::uptime(ctx).await,
        CommandName::ServerInfo => utility::serverinfo::serverinfo(ctx).await,
        CommandName::UserInfo => utility::userinfo::userinfo(ctx).await,
        CommandName::Invite => utility::invite::invite(ctx).await,
        CommandName::Debug => utility::debug::debug(ctx).await,
        CommandName::Ticket => ticket::ticket(ctx).await,
        CommandName::Play => music::play::play(ctx).await,
        CommandName::Skip => music::skip::skip(ctx).await,
        CommandName::Queue => music::queue::queue(ctx).await,
        CommandName::NowPlaying => music::nowplaying::nowplaying(ctx).await,
        CommandName::Stop => music::stop::stop(ctx).await,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    /// Tests alias resolution. Expected: aliases map to their canonical
    /// commands and unknown tokens resolve to nothing.
    #[test]
    fn resolves_aliases_and_rejects_unknown_tokens() {
        assert_eq!(CommandName::resolve("purge"), Some(CommandName::Clear));
        assert_eq!(CommandName::resolve("textmute"), Some(CommandName::Mute));
        assert_eq!(CommandName::resolve("textunmute"), Some(CommandName::Unmute));
        assert_eq!(CommandName::resolve("np"), Some(CommandName::NowPlaying));
        assert_eq!(CommandName::resolve("PING"), Some(CommandName::Ping));
        assert_eq!(CommandName::resolve("frobnicate"), None);
    }
}
