//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. The `AppError` enum is the top-level error
//! type returned by every handler. Request-level failures (`IncompletePayload`,
//! `NotFound`, `Unauthorized`) render as `{ type, message, details? }` with their own
//! status code, everything else is a logged 500.

pub mod auth;
pub mod config;
pub mod password;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError},
};

/// Default message for malformed or incomplete request bodies.
pub const INCOMPLETE_PAYLOAD_MESSAGE: &str = "Payload incompleto";

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication failure.
    ///
    /// Delegates to `AuthError::into_response()`, always a 401 with a generic message.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// I/O error, e.g. failing to bind the listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// A required structural field of the request is absent or malformed.
    ///
    /// Results in 400 Bad Request.
    #[error("{message}")]
    IncompletePayload {
        message: String,
        details: Option<Value>,
    },

    /// Lookup yielded no matching record.
    ///
    /// Results in 404 Not Found.
    #[error("{message}")]
    NotFound {
        message: String,
        details: Option<Value>,
    },
}

impl AppError {
    /// `IncompletePayload` with the default message.
    pub fn incomplete_payload() -> Self {
        Self::incomplete_payload_with(INCOMPLETE_PAYLOAD_MESSAGE)
    }

    /// `IncompletePayload` with a specific message.
    pub fn incomplete_payload_with(message: impl Into<String>) -> Self {
        Self::IncompletePayload {
            message: message.into(),
            details: None,
        }
    }

    /// `NotFound` with a specific message.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            details: None,
        }
    }

    /// Attaches details to a request-level error. Other variants are returned unchanged.
    pub fn with_details(self, details: Value) -> Self {
        match self {
            Self::IncompletePayload { message, .. } => Self::IncompletePayload {
                message,
                details: Some(details),
            },
            Self::NotFound { message, .. } => Self::NotFound {
                message,
                details: Some(details),
            },
            other => other,
        }
    }

    /// Name of the error as rendered in the `type` field of the response body.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::IncompletePayload { .. } => "IncompletePayload",
            Self::NotFound { .. } => "NotFound",
            Self::AuthErr(_) => "Unauthorized",
            _ => "InternalServerError",
        }
    }

    /// HTTP status the error renders with.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::IncompletePayload { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::AuthErr(_) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `IncompletePayload`
/// - 401 Unauthorized - For `AuthErr`, delegated to `AuthError::into_response()`
/// - 404 Not Found - For `NotFound`
/// - 500 Internal Server Error - For all other error types (DbErr, ConfigErr, etc.)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let kind = self.kind().to_string();

        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::IncompletePayload { message, details } | Self::NotFound { message, details } => (
                status,
                Json(ErrorDto {
                    kind,
                    message,
                    details,
                }),
            )
                .into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client to avoid leaking
/// implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                kind: "InternalServerError".to_string(),
                message: "Internal server error".to_string(),
                details: None,
            }),
        )
            .into_response()
    }
}
