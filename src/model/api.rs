use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body returned for every failed request.
///
/// `kind` is serialized as `type` and names the error (`IncompletePayload`, `NotFound`,
/// `Unauthorized` or `InternalServerError`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub details: Option<serde_json::Value>,
}

/// Acknowledgement returned by operations that do not echo a resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SuccessDto {
    pub success: SuccessTextDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SuccessTextDto {
    pub text: String,
}

impl SuccessDto {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            success: SuccessTextDto { text: text.into() },
        }
    }
}
