use super::*;

/// Tests that removal is idempotent.
///
/// Expected: removing an absent row succeeds
#[tokio::test]
async fn remove_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Mute)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MuteRepository::new(db);

    repo.remove("123456789", "42").await?;

    factory::create_mute(db, "123456789", "42", Utc::now()).await?;
    repo.remove("123456789", "42").await?;
    repo.remove("123456789", "42").await?;

    assert!(repo.find("123456789", "42").await?.is_none());

    Ok(())
}
