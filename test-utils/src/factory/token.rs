//! Token factory for creating test bearer tokens.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test tokens with customizable fields.
///
/// The owning user must already exist.
pub struct TokenFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    token: String,
    expires_at: DateTime<Utc>,
}

impl<'a> TokenFactory<'a> {
    /// Creates a new TokenFactory with default values.
    ///
    /// Defaults:
    /// - token: `"token_{id}"` where id is auto-incremented
    /// - expires_at: one hour from now
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            token: format!("token_{}", next_id()),
            expires_at: Utc::now() + Duration::hours(1),
        }
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    pub fn expires_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = expires_at;
        self
    }

    /// Builds and inserts the token entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::token::Model)` - Created token entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::token::Model, DbErr> {
        entity::token::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            token: ActiveValue::Set(self.token),
            token_type: ActiveValue::Set("bearer".to_string()),
            expires_at: ActiveValue::Set(self.expires_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a valid token for the user.
///
/// Shorthand for `TokenFactory::new(db, user_id).build().await`.
pub async fn create_token(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::token::Model, DbErr> {
    TokenFactory::new(db, user_id).build().await
}
