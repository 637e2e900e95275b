use chrono::Utc;
use sea_orm::DatabaseConnection;
use serenity::http::Http;
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{data::mute::MuteRepository, error::AppError, service::moderation::ModerationService};

/// Starts the mute sweeper scheduler
///
/// Runs every minute and lifts any timed mutes whose expiry has passed:
/// the Discord timeout is reversed, the muted role removed, and the row
/// deleted so the mute is not processed again.
///
/// # Arguments
/// - `db`: Database connection
/// - `discord_http`: Discord HTTP client for reversing timeouts
pub async fn start_scheduler(
    db: DatabaseConnection,
    discord_http: Arc<Http>,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_db = db.clone();
    let job_http = discord_http.clone();

    // Schedule job to run every minute
    let job = Job::new_async("0 * * * * *", move |_uuid, _lock| {
        let db = job_db.clone();
        let http = job_http.clone();

        Box::pin(async move {
            if let Err(e) = sweep_expired_mutes(&db, http).await {
                tracing::error!("Error sweeping expired mutes: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Mute sweeper scheduler started");

    Ok(())
}

/// Lifts every mute whose expiry is at or before now
async fn sweep_expired_mutes(
    db: &DatabaseConnection,
    discord_http: Arc<Http>,
) -> Result<(), AppError> {
    let expired = MuteRepository::new(db).get_expired(Utc::now()).await?;

    for mute in expired {
        let (Ok(guild_id), Ok(user_id)) = (mute.guild_id.parse::<u64>(), mute.user_id.parse::<u64>())
        else {
            tracing::error!(
                "Skipping mute {} with unparseable IDs ({}/{})",
                mute.id,
                mute.guild_id,
                mute.user_id
            );
            continue;
        };

        tracing::info!("Lifting expired mute for user {} in guild {}", user_id, guild_id);

        let moderation = ModerationService::new(db, discord_http.clone());
        if let Err(e) = moderation.lift_mute(guild_id, user_id).await {
            tracing::error!(
                "Failed to lift mute for user {} in guild {}: {}",
                user_id,
                guild_id,
                e
            );
        }
    }

    Ok(())
}
