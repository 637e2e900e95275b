use super::*;

/// Tests finding an existing user by Discord ID.
///
/// Expected: Ok(Some(Model)) with matching user data
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    repo.upsert(UpsertUserParam {
        discord_id: "123456789".to_string(),
        name: "TestUser".to_string(),
        avatar_hash: None,
        access_token: "token-1".to_string(),
        refresh_token: None,
    })
    .await?;

    let user = repo.find_by_discord_id("123456789").await?;
    assert!(user.is_some());
    assert_eq!(user.unwrap().name, "TestUser");

    Ok(())
}

/// Tests querying for a non-existent user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.find_by_discord_id("999999999").await?;

    assert!(user.is_none());

    Ok(())
}
