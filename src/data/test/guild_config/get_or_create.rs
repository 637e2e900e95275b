use super::*;

/// Tests lazy materialization for a never-seen guild.
///
/// Verifies that the first access creates a row carrying the compiled-in
/// defaults: comma prefix, default status line, zero tickets, all command
/// features on and the automod rate limiter off.
///
/// Expected: Ok(Model) with default values
#[tokio::test]
async fn creates_defaults_for_new_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);
    let config = repo.get_or_create("123456789").await?;

    assert_eq!(config.guild_id, "123456789");
    assert_eq!(config.prefix, ",");
    assert_eq!(config.status_message, "Watching over the server");
    assert!(config.error_logging);
    assert_eq!(config.ticket_count, 0);
    assert!(config.mod_log_channel_id.is_none());
    assert!(config.feature_moderation);
    assert!(config.feature_ping);
    assert!(config.feature_music);
    assert!(!config.feature_automod);

    Ok(())
}

/// Tests that repeated access returns the stored row instead of re-creating it.
///
/// Expected: same row ID on both calls, mutations preserved
#[tokio::test]
async fn returns_existing_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);

    let first = repo.get_or_create("123456789").await?;
    repo.apply_update("123456789", ConfigUpdate::Prefix("!".to_string()))
        .await?;
    let second = repo.get_or_create("123456789").await?;

    assert_eq!(first.id, second.id);
    assert_eq!(second.prefix, "!");

    Ok(())
}
