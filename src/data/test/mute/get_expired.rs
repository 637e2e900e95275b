use super::*;

/// Tests that only past-expiry mutes are returned.
///
/// Expected: the expired mute appears, the future one does not
#[tokio::test]
async fn returns_only_expired_mutes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Mute)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    factory::create_mute(db, "123456789", "42", now - Duration::minutes(1)).await?;
    factory::create_mute(db, "123456789", "43", now + Duration::minutes(10)).await?;

    let repo = MuteRepository::new(db);
    let expired = repo.get_expired(now).await?;

    assert_eq!(expired.len(), 1);
    assert_eq!(expired[0].user_id, "42");

    Ok(())
}

/// Tests that expired mutes disappear after removal.
///
/// Expected: empty result after remove
#[tokio::test]
async fn removed_mutes_are_absent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Mute)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    factory::create_mute(db, "123456789", "42", now - Duration::minutes(1)).await?;

    let repo = MuteRepository::new(db);
    assert_eq!(repo.get_expired(now).await?.len(), 1);

    repo.remove("123456789", "42").await?;
    assert!(repo.get_expired(now).await?.is_empty());

    Ok(())
}
