use super::*;

/// Tests the trailing expiry window.
///
/// Two fresh warnings and one 48 hours old; with a 24 hour window only the
/// fresh pair counts.
///
/// Expected: count of 2
#[tokio::test]
async fn excludes_warnings_outside_window() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Warning)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = WarningRepository::new(db);

    repo.create("123456789", "42", "Banned word").await?;
    repo.create("123456789", "42", "Banned word").await?;
    WarningFactory::new(db)
        .guild_id("123456789")
        .user_id("42")
        .created_at(Utc::now() - Duration::hours(48))
        .build()
        .await?;

    let count = repo.count_recent("123456789", "42", 24).await?;
    assert_eq!(count, 2);

    Ok(())
}

/// Tests member and guild scoping of the count.
///
/// Expected: warnings of other members and guilds do not count
#[tokio::test]
async fn scopes_to_guild_and_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Warning)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = WarningRepository::new(db);

    repo.create("123456789", "42", "Banned word").await?;
    repo.create("123456789", "43", "Banned word").await?;
    repo.create("999", "42", "Banned word").await?;

    assert_eq!(repo.count_recent("123456789", "42", 24).await?, 1);

    Ok(())
}
