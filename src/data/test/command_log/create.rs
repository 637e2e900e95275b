use super::*;

/// Tests recording both successful and failed invocations.
///
/// Expected: rows carry the success flag as given
#[tokio::test]
async fn records_success_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CommandLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CommandLogRepository::new(db);

    repo.create("123456789", "ping", "tester#0001", true).await?;
    repo.create("123456789", "kick", "tester#0001", false)
        .await?;

    let logs = repo.get_recent("123456789", 10).await?;
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0].command, "kick");
    assert!(!logs[0].success);
    assert_eq!(logs[1].command, "ping");
    assert!(logs[1].success);

    Ok(())
}
