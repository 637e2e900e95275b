use super::*;

/// Tests most-recent-first ordering and the limit parameter.
///
/// Expected: newest log first, list truncated to the limit
#[tokio::test]
async fn orders_newest_first_with_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CommandLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for command in ["ping", "help", "uptime", "serverinfo"] {
        factory::create_command_log(db, "123456789", command, true).await?;
    }

    let repo = CommandLogRepository::new(db);
    let logs = repo.get_recent("123456789", 2).await?;

    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0].command, "serverinfo");
    assert_eq!(logs[1].command, "uptime");

    Ok(())
}
