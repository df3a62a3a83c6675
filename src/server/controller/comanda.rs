use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde_json::Value;

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        comanda::{AppendComandaDto, ComandaDto, ComandaListItemDto, CreateComandaDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::comanda::{AppendComandaParams, CreateComandaParams},
        service::comanda::ComandaService,
        state::AppState,
    },
};

/// Tag for grouping comanda endpoints in OpenAPI documentation
pub static COMANDA_TAG: &str = "comanda";

const UPDATED_TEXT: &str = "comanda atualizada";
const REMOVED_TEXT: &str = "comanda removida";

/// List all comandas.
///
/// Returns the owner fields of every stored comanda, without line items. An empty
/// store is a valid empty array.
///
/// # Returns
/// - `200 OK` - List of comandas
/// - `401 Unauthorized` - Missing, unknown or expired bearer token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/RestAPIFurb/comandas",
    tag = COMANDA_TAG,
    security(("bearer_token" = [])),
    responses(
        (status = 200, description = "All comandas", body = Vec<ComandaListItemDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_comandas(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require().await?;

    tracing::info!("Listing comandas");

    let comandas = ComandaService::new(&state.db).get_all().await?;

    let dtos: Vec<ComandaListItemDto> = comandas
        .into_iter()
        .map(|comanda| comanda.into_list_item_dto())
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get the comanda of an owner.
///
/// # Arguments
/// - `id` - Owner id of the comanda
///
/// # Returns
/// - `200 OK` - Comanda with its line items
/// - `401 Unauthorized` - Missing, unknown or expired bearer token
/// - `404 Not Found` - Owner has no comanda
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/RestAPIFurb/comandas/{id}",
    tag = COMANDA_TAG,
    security(("bearer_token" = [])),
    params(
        ("id" = String, Path, description = "Owner id of the comanda")
    ),
    responses(
        (status = 200, description = "Comanda of the owner", body = ComandaDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Comanda not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_comanda(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require().await?;

    tracing::info!("Fetching comanda of owner '{}'", id);

    let comanda = ComandaService::new(&state.db).get_by_owner(&id).await?;

    Ok((StatusCode::OK, Json(comanda.into_dto())))
}

/// Create a comanda.
///
/// The body is validated in full before anything is persisted; a body that is not
/// JSON at all is treated as an incomplete payload.
///
/// # Returns
/// - `200 OK` - The stored comanda
/// - `400 Bad Request` - `produtos` missing or not an array, owner fields blank, malformed entries
/// - `401 Unauthorized` - Missing, unknown or expired bearer token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/RestAPIFurb/comandas",
    tag = COMANDA_TAG,
    security(("bearer_token" = [])),
    request_body = CreateComandaDto,
    responses(
        (status = 200, description = "Created comanda", body = ComandaDto),
        (status = 400, description = "Incomplete payload", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_comanda(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require().await?;

    let Json(payload) = payload.map_err(|e| {
        tracing::debug!("Rejected comanda body: {}", e);
        AppError::incomplete_payload()
    })?;
    let params = CreateComandaParams::from_payload(payload)?;

    tracing::info!(
        "Creating comanda for owner '{}' with {} products",
        params.owner_id,
        params.products.len()
    );

    let comanda = ComandaService::new(&state.db).create(params).await?;

    Ok((StatusCode::OK, Json(comanda.into_dto())))
}

/// Append line items to the comanda of an owner.
///
/// # Arguments
/// - `id` - Owner id of the comanda
///
/// # Returns
/// - `200 OK` - `{ success: { text: "comanda atualizada" } }`
/// - `400 Bad Request` - `produtos` missing, empty, not an array or malformed
/// - `401 Unauthorized` - Missing, unknown or expired bearer token
/// - `404 Not Found` - Owner has no comanda
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/RestAPIFurb/comandas/{id}",
    tag = COMANDA_TAG,
    security(("bearer_token" = [])),
    params(
        ("id" = String, Path, description = "Owner id of the comanda")
    ),
    request_body = AppendComandaDto,
    responses(
        (status = 200, description = "Comanda updated", body = SuccessDto),
        (status = 400, description = "Incomplete payload", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Comanda not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn append_comanda(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require().await?;

    let Json(payload) = payload.map_err(|e| {
        tracing::debug!("Rejected append body: {}", e);
        AppError::incomplete_payload()
    })?;
    let params = AppendComandaParams::from_payload(payload)?;

    tracing::info!(
        "Appending {} products to comanda of owner '{}'",
        params.products.len(),
        id
    );

    ComandaService::new(&state.db)
        .append_products(&id, params)
        .await?;

    Ok((StatusCode::OK, Json(SuccessDto::new(UPDATED_TEXT))))
}

/// Delete every comanda of an owner.
///
/// # Arguments
/// - `id` - Owner id of the comandas
///
/// # Returns
/// - `200 OK` - `{ success: { text: "comanda removida" } }`
/// - `400 Bad Request` - Blank owner id
/// - `401 Unauthorized` - Missing, unknown or expired bearer token
/// - `404 Not Found` - Owner has no comanda
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/RestAPIFurb/comandas/{id}",
    tag = COMANDA_TAG,
    security(("bearer_token" = [])),
    params(
        ("id" = String, Path, description = "Owner id of the comandas")
    ),
    responses(
        (status = 200, description = "Comanda removed", body = SuccessDto),
        (status = 400, description = "Missing owner id", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Comanda not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_comanda(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require().await?;

    let removed = ComandaService::new(&state.db).delete_by_owner(&id).await?;

    tracing::info!("Removed {} comandas of owner '{}'", removed, id);

    Ok((StatusCode::OK, Json(SuccessDto::new(REMOVED_TEXT))))
}
