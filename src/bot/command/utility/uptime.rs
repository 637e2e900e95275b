use crate::{bot::command::CommandContext, error::AppError};

/// Reports how long the process has been running.
///
/// Usage: `uptime`
pub async fn uptime(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let elapsed = ctx.started_at.elapsed().as_secs();

    ctx.reply(format!("Up for {}.", format_duration(elapsed)))
        .await?;

    Ok(())
}

fn format_duration(total_seconds: u64) -> String {
    let days = total_seconds / 86400;
    let hours = (total_seconds % 86400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if days > 0 {
        format!("{}d {}h {}m {}s", days, hours, minutes, seconds)
    } else if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    /// Tests duration formatting. Expected: leading zero units are omitted.
    #[test]
    fn formats_durations_without_leading_zero_units() {
        assert_eq!(format_duration(42), "42s");
        assert_eq!(format_duration(62), "1m 2s");
        assert_eq!(format_duration(3661), "1h 1m 1s");
        assert_eq!(format_duration(90061), "1d 1h 1m 1s");
    }
}
