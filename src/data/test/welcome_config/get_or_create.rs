use super::*;

/// Tests the default welcome config created on first access.
///
/// Expected: disabled, no channel, placeholder template with avatar thumbnail
#[tokio::test]
async fn creates_disabled_defaults() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::WelcomeConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = WelcomeConfigRepository::new(db);
    let config = repo.get_or_create("123456789").await?;

    assert!(!config.enabled);
    assert!(config.channel_id.is_none());
    assert_eq!(config.title, "Welcome to {server}!");
    assert!(config.description.contains("{mention}"));
    assert_eq!(config.color, "#5865F2");
    assert!(config.show_avatar);
    assert!(config.footer.is_none());
    assert!(config.image.is_none());

    Ok(())
}
