use super::*;

/// Tests the monotonic ticket counter.
///
/// Verifies that consecutive increments return 1, 2, 3 and that the stored
/// row carries the final value.
///
/// Expected: strictly increasing counter persisted on the row
#[tokio::test]
async fn counter_only_grows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);

    assert_eq!(repo.increment_ticket_count("123456789").await?, 1);
    assert_eq!(repo.increment_ticket_count("123456789").await?, 2);
    assert_eq!(repo.increment_ticket_count("123456789").await?, 3);

    let config = repo.get_or_create("123456789").await?;
    assert_eq!(config.ticket_count, 3);

    Ok(())
}

/// Tests that counters are independent per guild.
///
/// Expected: each guild starts at 1
#[tokio::test]
async fn counter_is_per_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);

    assert_eq!(repo.increment_ticket_count("111").await?, 1);
    assert_eq!(repo.increment_ticket_count("222").await?, 1);
    assert_eq!(repo.increment_ticket_count("111").await?, 2);

    Ok(())
}
