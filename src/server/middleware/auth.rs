use axum::http::{header::AUTHORIZATION, HeaderMap};
use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{token::TokenRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::user::User,
};

/// Scheme prefix expected in the `Authorization` header, matched case-insensitively.
const BEARER_SCHEME: &str = "bearer";

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, headers: &'a HeaderMap) -> Self {
        Self { db, headers }
    }

    /// Resolves the request's bearer token to a user.
    ///
    /// # Returns
    /// - `Ok(User)` - Token exists, is unexpired and its user still exists
    /// - `Err(AppError::AuthErr)` - Header missing or malformed, token unknown or expired
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn require(&self) -> Result<User, AppError> {
        let Some(raw) = bearer_token(self.headers) else {
            return Err(AuthError::MissingToken.into());
        };

        let Some(token) = TokenRepository::new(self.db).find_by_token(raw).await? else {
            return Err(AuthError::InvalidToken.into());
        };

        if token.is_expired(Utc::now()) {
            return Err(AuthError::TokenExpired(token.user_id).into());
        }

        let Some(user) = UserRepository::new(self.db)
            .find_by_id(token.user_id)
            .await?
        else {
            return Err(AuthError::InvalidToken.into());
        };

        Ok(user)
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?.trim();
    let (scheme, token) = value.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}
