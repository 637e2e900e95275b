use super::*;

/// Tests the per-guild retention cap.
///
/// Seeds a guild at the 1000-row cap, then records one more violation through
/// the repository. The oldest row must be evicted and the newest retained.
///
/// Expected: exactly 1000 rows, oldest gone, newest present
#[tokio::test]
async fn evicts_oldest_past_cap() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Violation)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for i in 0..1000 {
        factory::create_violation(db, "123456789", "42", &format!("message {}", i)).await?;
    }

    let repo = ViolationRepository::new(db);
    repo.create("123456789", "42", "Banned word", "message 1000")
        .await?;

    let count = entity::prelude::Violation::find().count(db).await?;
    assert_eq!(count, 1000);

    let recent = repo.get_recent("123456789", 1000).await?;
    assert_eq!(recent.first().unwrap().content, "message 1000");
    assert!(recent.iter().all(|v| v.content != "message 0"));

    Ok(())
}

/// Tests that the cap only evicts rows of the violating guild.
///
/// Expected: other guilds' rows untouched
#[tokio::test]
async fn cap_is_per_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Violation)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_violation(db, "999", "7", "other guild message").await?;
    for i in 0..1000 {
        factory::create_violation(db, "123456789", "42", &format!("message {}", i)).await?;
    }

    let repo = ViolationRepository::new(db);
    repo.create("123456789", "42", "Banned word", "overflow")
        .await?;

    let other = repo.get_recent("999", 10).await?;
    assert_eq!(other.len(), 1);
    assert_eq!(other[0].content, "other guild message");

    Ok(())
}
