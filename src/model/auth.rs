use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Credentials posted to `/auth/signin`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SignInDto {
    #[schema(example = "victor")]
    pub username: String,
    #[schema(example = "12345")]
    pub password: String,
}

/// Session token issued on a successful sign in.
///
/// Sent back by clients as `Authorization: Bearer <token>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TokenDto {
    #[serde(rename = "type")]
    #[schema(example = "bearer")]
    pub token_type: String,
    pub token: String,
    pub refresh_token: Option<String>,
}
