//! Session token data repository for database operations.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::token::{CreateTokenParam, Token, BEARER_TOKEN_TYPE};

/// Repository providing database operations for session tokens.
pub struct TokenRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TokenRepository<'a> {
    /// Creates a new TokenRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Persists a newly issued bearer token.
    ///
    /// # Returns
    /// - `Ok(Token)` - The stored token
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateTokenParam) -> Result<Token, DbErr> {
        let entity = entity::token::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            token: ActiveValue::Set(param.token),
            token_type: ActiveValue::Set(BEARER_TOKEN_TYPE.to_string()),
            expires_at: ActiveValue::Set(param.expires_at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Token::from_entity(entity))
    }

    /// Finds a token by its value, expired or not.
    ///
    /// # Returns
    /// - `Ok(Some(Token))` - Token found
    /// - `Ok(None)` - No such token
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_token(&self, token: &str) -> Result<Option<Token>, DbErr> {
        let entity = entity::prelude::Token::find()
            .filter(entity::token::Column::Token.eq(token))
            .one(self.db)
            .await?;

        Ok(entity.map(Token::from_entity))
    }

    /// Removes the expired tokens of a user.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user whose tokens are pruned
    /// - `now` - Reference time; tokens expiring at or before it are removed
    ///
    /// # Returns
    /// - `Ok(count)` - Number of tokens removed
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_expired_by_user(
        &self,
        user_id: i32,
        now: DateTime<Utc>,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::Token::delete_many()
            .filter(entity::token::Column::UserId.eq(user_id))
            .filter(entity::token::Column::ExpiresAt.lte(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
