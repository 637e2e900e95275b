//! Dashboard statistics aggregation.

use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;
use serenity::cache::Cache;

use crate::{data::command_log::CommandLogRepository, error::AppError, model::api::StatsDto};

/// Service assembling the stats block shown on a guild dashboard.
pub struct StatsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds the stats for one guild.
    ///
    /// Guild and member totals come from the gateway cache; the command total
    /// counts this session's log rows, derived from the uptime.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `uptime_seconds` - Seconds since process start
    /// - `cache` - Serenity gateway cache
    ///
    /// # Returns
    /// - `Ok(StatsDto)` - Aggregated statistics
    /// - `Err(AppError)` - Database error counting commands
    pub async fn guild_stats(
        &self,
        guild_id: &str,
        uptime_seconds: u64,
        cache: &Cache,
    ) -> Result<StatsDto, AppError> {
        let started = Utc::now() - Duration::seconds(uptime_seconds as i64);
        let commands_run = CommandLogRepository::new(self.db)
            .count_since(guild_id, started)
            .await?;

        let mut users = 0u64;
        for cached_guild_id in cache.guilds() {
            if let Some(guild) = cache.guild(cached_guild_id) {
                users += guild.member_count;
            }
        }

        Ok(StatsDto {
            uptime_seconds,
            guilds: cache.guild_count() as u64,
            users,
            commands_run,
        })
    }
}
