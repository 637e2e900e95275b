use super::*;

/// Tests replace-on-insert semantics for the same member.
///
/// Verifies that upserting twice for one `(guild, user)` pair leaves exactly
/// one row carrying the later expiry.
///
/// Expected: one row with the second expires_at
#[tokio::test]
async fn second_upsert_replaces_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Mute)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MuteRepository::new(db);

    let first_expiry = Utc::now() + Duration::minutes(10);
    let second_expiry = Utc::now() + Duration::minutes(30);

    repo.upsert("123456789", "42", first_expiry).await?;
    repo.upsert("123456789", "42", second_expiry).await?;

    let rows = entity::prelude::Mute::find().all(db).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].expires_at, second_expiry);

    Ok(())
}

/// Tests that different members keep separate rows.
///
/// Expected: two rows, one per member
#[tokio::test]
async fn members_are_independent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Mute)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MuteRepository::new(db);
    let expiry = Utc::now() + Duration::minutes(10);

    repo.upsert("123456789", "42", expiry).await?;
    repo.upsert("123456789", "43", expiry).await?;

    let rows = entity::prelude::Mute::find().all(db).await?;
    assert_eq!(rows.len(), 2);

    Ok(())
}
