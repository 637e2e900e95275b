use chrono::Duration;

/// Parses a Discord user mention or raw ID from a command argument.
///
/// Accepts `<@123>`, `<@!123>`, or a bare numeric ID. Invalid input is user
/// error, not an application error, so the caller replies rather than failing.
///
/// # Arguments
/// - `value` - The command argument to parse
///
/// # Returns
/// - `Some(u64)` - The mentioned user's Discord ID
/// - `None` - Argument is not a mention or numeric ID
pub fn parse_user_mention(value: &str) -> Option<u64> {
    let inner = value
        .strip_prefix("<@")
        .and_then(|v| v.strip_suffix('>'))
        .map(|v| v.strip_prefix('!').unwrap_or(v))
        .unwrap_or(value);

    inner.parse::<u64>().ok()
}

/// Parses a human duration argument like `10m`, `2h`, or `1d`.
///
/// Supports minutes (`m`), hours (`h`), and days (`d`) with a positive
/// integer magnitude. Anything else is treated as user error.
///
/// # Arguments
/// - `value` - The duration string to parse
///
/// # Returns
/// - `Some(Duration)` - The parsed duration
/// - `None` - Not a recognized duration format
pub fn parse_duration(value: &str) -> Option<Duration> {
    if value.len() < 2 {
        return None;
    }

    let (magnitude, unit) = value.split_at(value.len() - 1);
    let amount = magnitude.parse::<i64>().ok().filter(|n| *n > 0)?;

    match unit {
        "m" => Some(Duration::minutes(amount)),
        "h" => Some(Duration::hours(amount)),
        "d" => Some(Duration::days(amount)),
        _ => None,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_plain_and_decorated_mentions() {
        assert_eq!(parse_user_mention("<@123456789>"), Some(123456789));
        assert_eq!(parse_user_mention("<@!123456789>"), Some(123456789));
        assert_eq!(parse_user_mention("123456789"), Some(123456789));
    }

    #[test]
    fn rejects_invalid_mentions() {
        assert_eq!(parse_user_mention("everyone"), None);
        assert_eq!(parse_user_mention("<@abc>"), None);
        assert_eq!(parse_user_mention(""), None);
    }

    #[test]
    fn parses_duration_units() {
        assert_eq!(parse_duration("10m"), Some(Duration::minutes(10)));
        assert_eq!(parse_duration("2h"), Some(Duration::hours(2)));
        assert_eq!(parse_duration("1d"), Some(Duration::days(1)));
    }

    #[test]
    fn rejects_invalid_durations() {
        assert_eq!(parse_duration("10"), None);
        assert_eq!(parse_duration("m"), None);
        assert_eq!(parse_duration("0m"), None);
        assert_eq!(parse_duration("-5m"), None);
        assert_eq!(parse_duration("10w"), None);
    }
}
