use serenity::all::Permissions;

use crate::{bot::command::CommandContext, error::AppError, model::guild_config::FeatureName};

/// Dumps the guild's effective configuration for troubleshooting.
///
/// Usage: `debug`
pub async fn debug(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    if !ctx.require_permissions(Permissions::MANAGE_GUILD).await? {
        return Ok(());
    }

    let config = ctx.config;

    let enabled_features: Vec<&str> = FeatureName::ALL
        .iter()
        .filter(|f| f.is_enabled(config))
        .map(|f| f.as_str())
        .collect();

    ctx.reply(format!(
        "Prefix: `{}` | Error logging: {} | Tickets issued: {} | Mod log: {} | Muted role: {} | Features: {}",
        config.prefix,
        config.error_logging,
        config.ticket_count,
        config.mod_log_channel_id.as_deref().unwrap_or("unset"),
        config.muted_role_id.as_deref().unwrap_or("unset"),
        enabled_features.join(", "),
    ))
    .await?;

    Ok(())
}
