use super::*;

/// Tests most-recent-first ordering and the limit parameter.
///
/// Expected: newest violation first, list truncated to the limit
#[tokio::test]
async fn orders_newest_first_with_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Violation)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for i in 0..5 {
        factory::create_violation(db, "123456789", "42", &format!("message {}", i)).await?;
    }

    let repo = ViolationRepository::new(db);
    let recent = repo.get_recent("123456789", 3).await?;

    assert_eq!(recent.len(), 3);
    assert_eq!(recent[0].content, "message 4");
    assert_eq!(recent[1].content, "message 3");
    assert_eq!(recent[2].content, "message 2");

    Ok(())
}

/// Tests guild scoping of the listing.
///
/// Expected: only the requested guild's violations are returned
#[tokio::test]
async fn scopes_to_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Violation)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_violation(db, "111", "42", "first guild").await?;
    factory::create_violation(db, "222", "42", "second guild").await?;

    let repo = ViolationRepository::new(db);
    let recent = repo.get_recent("111", 10).await?;

    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].content, "first guild");

    Ok(())
}
