//! Authentication service.
//!
//! This module provides the `AuthService`, which verifies username/password pairs
//! against the stored Argon2 hashes, issues opaque bearer tokens and bootstraps the
//! configured admin account.

use chrono::{Duration, Utc};
use rand::Rng;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{token::TokenRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::{
        token::{CreateTokenParam, Token},
        user::{CreateUserParam, SignInParam},
    },
    util::password::verify_password,
};

/// Length of issued bearer tokens.
const TOKEN_LENGTH: usize = 64;

/// Service providing sign in and account bootstrap.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    /// Lifetime of issued tokens.
    token_ttl: Duration,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `token_ttl` - How long issued tokens remain valid
    ///
    /// # Returns
    /// - `AuthService` - New service instance
    pub fn new(db: &'a DatabaseConnection, token_ttl: Duration) -> Self {
        Self { db, token_ttl }
    }

    /// Verifies credentials and issues a bearer token.
    ///
    /// Expired tokens of the user are pruned before the new one is stored. Every
    /// failure, including store errors, is reported as an `AuthError` so the caller
    /// can only ever answer 401.
    ///
    /// # Arguments
    /// - `param` - Submitted username and password
    ///
    /// # Returns
    /// - `Ok(Token)` - Newly issued token
    /// - `Err(AuthError::MissingCredentials)` - Username or password is empty
    /// - `Err(AuthError::UnknownUser)` - No user with that username
    /// - `Err(AuthError::InvalidPassword)` - Password does not match
    /// - `Err(AuthError::VerificationFailed)` - Store or hash backend failure
    pub async fn sign_in(&self, param: SignInParam) -> Result<Token, AuthError> {
        let username = param.username.trim();
        if username.is_empty() || param.password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        let user = UserRepository::new(self.db)
            .find_by_username(username)
            .await
            .map_err(|e| AuthError::VerificationFailed(e.to_string()))?
            .ok_or_else(|| AuthError::UnknownUser(username.to_string()))?;

        let matches = verify_password(&param.password, &user.password_hash)
            .await
            .map_err(|e| AuthError::VerificationFailed(e.to_string()))?;
        if !matches {
            return Err(AuthError::InvalidPassword(user.username));
        }

        let now = Utc::now();
        let token_repo = TokenRepository::new(self.db);

        token_repo
            .delete_expired_by_user(user.id, now)
            .await
            .map_err(|e| AuthError::VerificationFailed(e.to_string()))?;

        let token = token_repo
            .create(CreateTokenParam {
                user_id: user.id,
                token: Self::generate_token(),
                expires_at: now + self.token_ttl,
            })
            .await
            .map_err(|e| AuthError::VerificationFailed(e.to_string()))?;

        tracing::info!("Issued token for user '{}'", user.username);

        Ok(token)
    }

    /// Creates the user if no user with that username exists yet.
    ///
    /// Used at startup to bootstrap the configured account.
    ///
    /// # Returns
    /// - `Ok(true)` - User was created
    /// - `Ok(false)` - User already existed, its password is left untouched
    /// - `Err(AppError::DbErr)` - Database or hashing error
    pub async fn ensure_user(&self, param: CreateUserParam) -> Result<bool, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo
            .find_by_username(param.username.trim())
            .await?
            .is_some()
        {
            return Ok(false);
        }

        user_repo.create(param).await?;
        Ok(true)
    }

    /// Generates a random alphanumeric bearer token.
    fn generate_token() -> String {
        const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                                 abcdefghijklmnopqrstuvwxyz\
                                 0123456789";

        let mut rng = rand::rng();

        (0..TOKEN_LENGTH)
            .map(|_| {
                let idx = rng.random_range(0..CHARSET.len());
                CHARSET[idx] as char
            })
            .collect()
    }
}
