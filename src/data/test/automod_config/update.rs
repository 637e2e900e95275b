use super::*;

/// Tests the partial-field merge semantics.
///
/// Verifies that provided fields change while absent fields keep their
/// stored values.
///
/// Expected: only enabled and banned_words change
#[tokio::test]
async fn merges_only_provided_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AutomodConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AutomodConfigRepository::new(db);
    repo.get_or_create("123456789").await?;

    let policy = repo
        .update(
            "123456789",
            UpdateAutomodParams {
                enabled: Some(true),
                banned_words: Some(vec!["badword".to_string()]),
                ..Default::default()
            },
        )
        .await?;

    assert!(policy.enabled);
    assert_eq!(policy.banned_words, vec!["badword"]);
    // untouched fields keep defaults
    assert_eq!(policy.warnings_before_mute, 3);
    assert_eq!(policy.mute_duration_minutes, 10);
    assert!(policy.delete_messages);

    Ok(())
}

/// Tests that an update materializes the row for a never-seen guild.
///
/// Expected: update on missing row creates defaults first, then merges
#[tokio::test]
async fn creates_row_when_missing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AutomodConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AutomodConfigRepository::new(db);

    let policy = repo
        .update(
            "123456789",
            UpdateAutomodParams {
                warnings_before_mute: Some(5),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(policy.warnings_before_mute, 5);
    assert!(!policy.enabled);

    Ok(())
}

/// Tests that an updated policy persists across reads.
///
/// Expected: subsequent get_or_create returns the merged values
#[tokio::test]
async fn update_is_reflected_on_read() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AutomodConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AutomodConfigRepository::new(db);

    repo.update(
        "123456789",
        UpdateAutomodParams {
            whitelist_roles: Some(vec!["777".to_string()]),
            ..Default::default()
        },
    )
    .await?;

    let policy = repo.get_or_create("123456789").await?;
    assert_eq!(policy.whitelist_roles, vec!["777"]);

    Ok(())
}
