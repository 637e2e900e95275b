use super::*;

/// Tests that a fresh login creates the user row.
///
/// Expected: Ok(Model) with the provided identity and tokens
#[tokio::test]
async fn creates_user_on_first_login() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    let user = repo
        .upsert(UpsertUserParam {
            discord_id: "123456789".to_string(),
            name: "TestUser".to_string(),
            avatar_hash: Some("abc123".to_string()),
            access_token: "token-1".to_string(),
            refresh_token: None,
        })
        .await?;

    assert_eq!(user.discord_id, "123456789");
    assert_eq!(user.name, "TestUser");
    assert_eq!(user.access_token, "token-1");

    Ok(())
}

/// Tests that a repeat login refreshes the row instead of duplicating it.
///
/// Expected: one row with the latest name and tokens
#[tokio::test]
async fn refreshes_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    repo.upsert(UpsertUserParam {
        discord_id: "123456789".to_string(),
        name: "OldName".to_string(),
        avatar_hash: None,
        access_token: "token-1".to_string(),
        refresh_token: None,
    })
    .await?;

    let updated = repo
        .upsert(UpsertUserParam {
            discord_id: "123456789".to_string(),
            name: "NewName".to_string(),
            avatar_hash: Some("def456".to_string()),
            access_token: "token-2".to_string(),
            refresh_token: Some("refresh-1".to_string()),
        })
        .await?;

    assert_eq!(updated.name, "NewName");
    assert_eq!(updated.access_token, "token-2");
    assert_eq!(updated.refresh_token.as_deref(), Some("refresh-1"));

    let count = entity::prelude::User::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
