use super::*;
use chrono::{Duration, Utc};

/// Tests the session cutoff used by the stats endpoint.
///
/// Two rows after the cutoff and one before it.
///
/// Expected: count of 2
#[tokio::test]
async fn excludes_rows_before_the_cutoff() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CommandLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let cutoff = Utc::now() - Duration::hours(1);

    factory::create_command_log(db, "111", "ping", true).await?;
    factory::create_command_log(db, "111", "help", false).await?;
    factory::create_command_log_at(db, "111", "ping", true, cutoff - Duration::hours(5)).await?;

    let repo = CommandLogRepository::new(db);

    assert_eq!(repo.count_since("111", cutoff).await?, 2);

    Ok(())
}

/// Tests guild scoping of the count.
///
/// Expected: other guilds' rows do not count
#[tokio::test]
async fn counts_per_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CommandLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_command_log(db, "111", "ping", true).await?;
    factory::create_command_log(db, "222", "ping", true).await?;

    let repo = CommandLogRepository::new(db);
    let cutoff = Utc::now() - Duration::hours(1);

    assert_eq!(repo.count_since("111", cutoff).await?, 1);
    assert_eq!(repo.count_since("333", cutoff).await?, 0);

    Ok(())
}
