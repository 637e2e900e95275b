use super::*;

/// Tests the explicit cleanup operation.
///
/// Expected: only warnings before the cutoff are deleted
#[tokio::test]
async fn deletes_only_stale_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Warning)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = WarningRepository::new(db);

    WarningFactory::new(db)
        .created_at(Utc::now() - Duration::days(30))
        .build()
        .await?;
    WarningFactory::new(db)
        .created_at(Utc::now() - Duration::days(30))
        .build()
        .await?;
    repo.create("123456789", "42", "Banned word").await?;

    let deleted = repo.delete_older_than(Utc::now() - Duration::days(7)).await?;
    assert_eq!(deleted, 2);

    let remaining = entity::prelude::Warning::find().count(db).await?;
    assert_eq!(remaining, 1);

    Ok(())
}
