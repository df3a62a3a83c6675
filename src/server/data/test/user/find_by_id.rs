use super::*;

/// Tests finding a user by id.
///
/// Expected: Ok(Some(User)) for a stored id, Ok(None) otherwise
#[tokio::test]
async fn finds_user_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::user::create_user(db).await?;
    let repo = UserRepository::new(db);

    let user = repo.find_by_id(stored.id).await?.unwrap();
    assert_eq!(user.username, stored.username);

    assert!(repo.find_by_id(stored.id + 1000).await?.is_none());

    Ok(())
}
