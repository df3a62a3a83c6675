//! Session token domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::auth::TokenDto;

/// Token type issued by the sign in endpoint.
pub const BEARER_TOKEN_TYPE: &str = "bearer";

/// Session token granting access to the protected routes until `expires_at`.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub id: i32,
    pub user_id: i32,
    pub token: String,
    pub token_type: String,
    pub expires_at: DateTime<Utc>,
}

impl Token {
    /// Converts an entity model to a token domain model at the repository boundary.
    pub fn from_entity(entity: entity::token::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            token: entity.token,
            token_type: entity.token_type,
            expires_at: entity.expires_at,
        }
    }

    /// Whether the token is past its expiry at `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    pub fn into_dto(self) -> TokenDto {
        TokenDto {
            token_type: self.token_type,
            token: self.token,
            refresh_token: None,
        }
    }
}

/// Parameters for persisting a newly issued token.
#[derive(Debug, Clone)]
pub struct CreateTokenParam {
    pub user_id: i32,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}
