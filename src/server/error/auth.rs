use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Message returned to the client for every authentication failure.
pub const UNAUTHORIZED_MESSAGE: &str = "Usuário não autorizado.";

/// Reasons a request was not authorized.
///
/// The variants only exist for server-side diagnostics. Every one of them renders the
/// same 401 response.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Sign in body was not JSON or lacked a username or password.
    #[error("Sign in payload is missing credentials")]
    MissingCredentials,

    /// No user exists with the provided username.
    #[error("No user found with username '{0}'")]
    UnknownUser(String),

    /// Password did not match the stored hash.
    #[error("Invalid password for user '{0}'")]
    InvalidPassword(String),

    /// Credentials could not be checked at all (store or hash backend failure).
    #[error("Failed to verify credentials: {0}")]
    VerificationFailed(String),

    /// Protected route was called without an `Authorization: Bearer` header.
    #[error("Request has no bearer token")]
    MissingToken,

    /// Bearer token does not exist or its user no longer exists.
    #[error("Bearer token is not valid")]
    InvalidToken,

    /// Bearer token exists but is past its expiry.
    #[error("Bearer token for user {0} has expired")]
    TokenExpired(i32),
}

/// Converts authentication errors into HTTP responses.
///
/// Always 401 Unauthorized with the generic message. The actual reason is logged at
/// debug level, verification failures at warn.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match &self {
            Self::VerificationFailed(_) => tracing::warn!("{}", self),
            _ => tracing::debug!("{}", self),
        }

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                kind: "Unauthorized".to_string(),
                message: UNAUTHORIZED_MESSAGE.to_string(),
                details: None,
            }),
        )
            .into_response()
    }
}
