//! Helpers for turning raw JSON request bodies into typed payloads.
//!
//! Handlers accept bodies as `serde_json::Value` so that structural problems are
//! reported as `IncompletePayload` in the API's own error format rather than through
//! axum's default rejection responses.

use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::server::error::AppError;

/// Message used when `produtos` is absent or not an array.
pub const PRODUTOS_NOT_ARRAY_MESSAGE: &str = "Os produtos devem ser um array";

/// Ensures the payload carries a `produtos` array.
///
/// # Arguments
/// - `payload` - Raw JSON body of the request
///
/// # Returns
/// - `Ok(())` - `produtos` is present and is an array (possibly empty)
/// - `Err(AppError::IncompletePayload)` - `produtos` is missing or has another type
pub fn require_produtos_array(payload: &Value) -> Result<(), AppError> {
    match payload.get("produtos") {
        Some(Value::Array(_)) => Ok(()),
        _ => Err(AppError::incomplete_payload_with(PRODUTOS_NOT_ARRAY_MESSAGE)),
    }
}

/// Deserializes a raw JSON body into a typed payload.
///
/// # Arguments
/// - `payload` - Raw JSON body of the request
///
/// # Returns
/// - `Ok(T)` - Successfully deserialized payload
/// - `Err(AppError::IncompletePayload)` - A field is missing or has the wrong type; the
///   serde error is attached as `details.reason`
pub fn parse_payload<T: DeserializeOwned>(payload: Value) -> Result<T, AppError> {
    serde_json::from_value(payload).map_err(|e| {
        AppError::incomplete_payload().with_details(json!({ "reason": e.to_string() }))
    })
}

/// Trims a required text field and rejects it when nothing is left.
///
/// # Arguments
/// - `field` - Wire name of the field, reported in the error details
/// - `value` - Raw value from the payload
///
/// # Returns
/// - `Ok(String)` - Trimmed value
/// - `Err(AppError::IncompletePayload)` - Value is empty or whitespace only
pub fn require_text(field: &str, value: &str) -> Result<String, AppError> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(AppError::incomplete_payload().with_details(json!({ "field": field })));
    }

    Ok(trimmed.to_string())
}
