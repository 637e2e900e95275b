use super::*;

/// Tests that a top-level update is reflected on the next read.
///
/// Expected: updated prefix visible through get_or_create
#[tokio::test]
async fn update_is_reflected_on_read() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);

    repo.apply_update("123456789", ConfigUpdate::Prefix("!".to_string()))
        .await?;

    let config = repo.get_or_create("123456789").await?;
    assert_eq!(config.prefix, "!");

    Ok(())
}

/// Tests that a feature update touches only the targeted flag.
///
/// Expected: music flag off, every other flag at its default
#[tokio::test]
async fn feature_update_touches_only_target() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);

    let config = repo
        .apply_update(
            "123456789",
            ConfigUpdate::Feature(FeatureName::Music, false),
        )
        .await?;

    assert!(!config.feature_music);
    assert!(config.feature_moderation);
    assert!(config.feature_clear);
    assert!(config.feature_ping);
    assert!(!config.feature_automod);
    assert_eq!(config.prefix, ",");

    Ok(())
}

/// Tests setting and clearing a nullable ID column.
///
/// Expected: value stored, then cleared back to None
#[tokio::test]
async fn sets_and_clears_nullable_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);

    let config = repo
        .apply_update(
            "123456789",
            ConfigUpdate::MutedRoleId(Some("42".to_string())),
        )
        .await?;
    assert_eq!(config.muted_role_id.as_deref(), Some("42"));

    let config = repo
        .apply_update("123456789", ConfigUpdate::MutedRoleId(None))
        .await?;
    assert!(config.muted_role_id.is_none());

    Ok(())
}
