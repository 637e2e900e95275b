use super::*;

/// Tests the partial-field merge semantics.
///
/// Expected: provided fields change, absent fields keep stored values
#[tokio::test]
async fn merges_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::WelcomeConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = WelcomeConfigRepository::new(db);

    let config = repo
        .update(
            "123456789",
            UpdateWelcomeParams {
                enabled: Some(true),
                channel_id: Some(Some("555".to_string())),
                title: Some("Hello {user}".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(config.enabled);
    assert_eq!(config.channel_id.as_deref(), Some("555"));
    assert_eq!(config.title, "Hello {user}");
    assert_eq!(config.color, "#5865F2");
    assert!(config.show_avatar);

    Ok(())
}

/// Tests clearing a nullable column through the merge.
///
/// Expected: footer set, then cleared back to None
#[tokio::test]
async fn clears_nullable_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::WelcomeConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = WelcomeConfigRepository::new(db);

    let config = repo
        .update(
            "123456789",
            UpdateWelcomeParams {
                footer: Some(Some("Enjoy your stay".to_string())),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(config.footer.as_deref(), Some("Enjoy your stay"));

    let config = repo
        .update(
            "123456789",
            UpdateWelcomeParams {
                footer: Some(None),
                ..Default::default()
            },
        )
        .await?;
    assert!(config.footer.is_none());

    Ok(())
}
