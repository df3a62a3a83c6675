use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        auth::{SignInDto, TokenDto},
    },
    server::{
        error::{auth::AuthError, AppError},
        model::user::SignInParam,
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Sign in with username and password.
///
/// Issues a bearer token for the protected comanda routes. Every failure, including
/// a malformed body, answers with the same generic 401.
///
/// # Returns
/// - `200 OK` - `{ type: "bearer", token, refreshToken: null }`
/// - `401 Unauthorized` - Credentials missing or wrong, or the store failed
#[utoipa::path(
    post,
    path = "/auth/signin",
    tag = AUTH_TAG,
    request_body = SignInDto,
    responses(
        (status = 200, description = "Issued bearer token", body = TokenDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto)
    ),
)]
pub async fn sign_in(
    State(state): State<AppState>,
    payload: Result<Json<SignInDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(|e| {
        tracing::debug!("Rejected sign in body: {}", e);
        AuthError::MissingCredentials
    })?;

    let token = AuthService::new(&state.db, state.token_ttl)
        .sign_in(SignInParam::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(token.into_dto())))
}
