use super::*;

/// Tests persisting an issued token.
///
/// Expected: Ok(Token) of type bearer with the requested expiry
#[tokio::test]
async fn creates_bearer_token() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let expires_at = Utc::now() + Duration::hours(24);

    let token = TokenRepository::new(db)
        .create(CreateTokenParam {
            user_id: user.id,
            token: "abc123".to_string(),
            expires_at,
        })
        .await?;

    assert_eq!(token.user_id, user.id);
    assert_eq!(token.token, "abc123");
    assert_eq!(token.token_type, BEARER_TOKEN_TYPE);
    assert!((token.expires_at - expires_at).num_seconds().abs() < 1);

    Ok(())
}

/// Tests token values are unique.
///
/// Expected: Err(DbErr) on the second insert
#[tokio::test]
async fn rejects_duplicate_token() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let repo = TokenRepository::new(db);
    let param = CreateTokenParam {
        user_id: user.id,
        token: "same".to_string(),
        expires_at: Utc::now() + Duration::hours(1),
    };

    repo.create(param.clone()).await?;
    let duplicate = repo.create(param).await;

    assert!(duplicate.is_err());

    Ok(())
}
