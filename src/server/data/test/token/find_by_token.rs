use super::*;

/// Tests finding a stored token.
///
/// Expected: Ok(Some(Token)) for the owner
#[tokio::test]
async fn finds_existing_token() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let stored = factory::token::create_token(db, user.id).await?;

    let token = TokenRepository::new(db)
        .find_by_token(&stored.token)
        .await?
        .unwrap();

    assert_eq!(token.id, stored.id);
    assert_eq!(token.user_id, user.id);

    Ok(())
}

/// Tests expired tokens are still returned; expiry is checked by the caller.
///
/// Expected: Ok(Some(Token)) whose is_expired is true
#[tokio::test]
async fn returns_expired_token() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let stored = factory::token::TokenFactory::new(db, user.id)
        .expires_at(Utc::now() - Duration::hours(1))
        .build()
        .await?;

    let token = TokenRepository::new(db)
        .find_by_token(&stored.token)
        .await?
        .unwrap();

    assert!(token.is_expired(Utc::now()));

    Ok(())
}

/// Tests querying an unknown token.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_token() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = TokenRepository::new(db).find_by_token("missing").await?;

    assert!(result.is_none());

    Ok(())
}
