use super::*;

/// Tests the default policy created on first access.
///
/// Expected: disabled, empty lists, warn+mute on, thresholds 3/24h/10m,
/// message deletion on
#[tokio::test]
async fn creates_default_policy() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AutomodConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AutomodConfigRepository::new(db);
    let policy = repo.get_or_create("123456789").await?;

    assert!(!policy.enabled);
    assert!(policy.banned_words.is_empty());
    assert!(policy.warn_on_violation);
    assert!(policy.mute_on_violation);
    assert_eq!(policy.warnings_before_mute, 3);
    assert_eq!(policy.warning_expiry_hours, 24);
    assert_eq!(policy.mute_duration_minutes, 10);
    assert!(policy.delete_messages);
    assert!(policy.whitelist_roles.is_empty());
    assert!(policy.whitelist_members.is_empty());

    Ok(())
}

/// Tests decoding of stored JSON list columns.
///
/// Expected: banned words and whitelists come back as typed vectors
#[tokio::test]
async fn decodes_stored_lists() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AutomodConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::AutomodConfigFactory::new(db)
        .guild_id("123456789")
        .banned_words(&["badword", "slur"])
        .whitelist_members(&["42"])
        .build()
        .await?;

    let repo = AutomodConfigRepository::new(db);
    let policy = repo.get_or_create("123456789").await?;

    assert_eq!(policy.banned_words, vec!["badword", "slur"]);
    assert_eq!(policy.whitelist_members, vec!["42"]);

    Ok(())
}
