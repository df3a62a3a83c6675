use super::*;

/// Tests only the expired tokens of the given user are removed.
///
/// Verifies that valid tokens of the user and expired tokens of other users are
/// left in place.
///
/// Expected: Ok(1) with the other tokens still present
#[tokio::test]
async fn deletes_only_expired_tokens_of_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    let now = Utc::now();

    let expired = factory::token::TokenFactory::new(db, user.id)
        .expires_at(now - Duration::hours(1))
        .build()
        .await?;
    let valid = factory::token::TokenFactory::new(db, user.id)
        .expires_at(now + Duration::hours(1))
        .build()
        .await?;
    let other_expired = factory::token::TokenFactory::new(db, other.id)
        .expires_at(now - Duration::hours(1))
        .build()
        .await?;

    let repo = TokenRepository::new(db);
    let removed = repo.delete_expired_by_user(user.id, now).await?;

    assert_eq!(removed, 1);
    assert!(repo.find_by_token(&expired.token).await?.is_none());
    assert!(repo.find_by_token(&valid.token).await?.is_some());
    assert!(repo.find_by_token(&other_expired.token).await?.is_some());

    Ok(())
}
