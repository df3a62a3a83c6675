use super::*;

/// Tests finding an existing user by username.
///
/// Expected: Ok(Some(User)) with matching id
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::user::UserFactory::new(db)
        .username("victor")
        .build()
        .await?;

    let user = UserRepository::new(db)
        .find_by_username("victor")
        .await?
        .unwrap();

    assert_eq!(user.id, stored.id);
    assert_eq!(user.password_hash, stored.password);

    Ok(())
}

/// Tests lookups are exact matches.
///
/// Expected: Ok(None) for a username that differs only by case
#[tokio::test]
async fn returns_none_for_unknown_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("victor")
        .build()
        .await?;

    let result = UserRepository::new(db).find_by_username("Victor").await?;

    assert!(result.is_none());

    Ok(())
}
