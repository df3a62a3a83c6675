use super::*;

/// Tests creating a user stores a hash, never the plain password.
///
/// Expected: Ok(User) whose hash verifies against the plain password
#[tokio::test]
async fn hashes_password_on_create() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserRepository::new(db)
        .create(CreateUserParam {
            username: " victor ".to_string(),
            password: "12345".to_string(),
        })
        .await?;

    assert_eq!(user.username, "victor");
    assert_ne!(user.password_hash, "12345");
    assert!(verify_password("12345", &user.password_hash).await.unwrap());
    assert!(!verify_password("54321", &user.password_hash).await.unwrap());

    Ok(())
}

/// Tests usernames are unique.
///
/// Expected: Err(DbErr) when the username is taken
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("victor")
        .build()
        .await?;

    let result = UserRepository::new(db)
        .create(CreateUserParam {
            username: "victor".to_string(),
            password: "12345".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
