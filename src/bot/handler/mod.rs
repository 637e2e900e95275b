use sea_orm::DatabaseConnection;
use serenity::all::{Context, EventHandler, Member, Message, Ready};
use serenity::async_trait;
use std::sync::Arc;
use std::time::Instant;

use crate::service::{automod::AutoModService, music::MusicRegistry};

pub mod member;
pub mod message;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub db: DatabaseConnection,
    pub automod: AutoModService,
    pub music: Arc<MusicRegistry>,
    pub started_at: Instant,
}

impl Handler {
    pub fn new(db: DatabaseConnection, music: Arc<MusicRegistry>, started_at: Instant) -> Self {
        Self {
            db,
            automod: AutoModService::new(),
            music,
            started_at,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called for every message the bot can see
    async fn message(&self, ctx: Context, msg: Message) {
        message::handle_message(
            &self.db,
            &self.automod,
            &self.music,
            self.started_at,
            ctx,
            msg,
        )
        .await;
    }

    /// Called when a member joins a guild
    async fn guild_member_addition(&self, ctx: Context, new_member: Member) {
        member::handle_guild_member_addition(&self.db, ctx, new_member).await;
    }
}
