use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A product line as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProdutoDto {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Burger")]
    pub nome: String,
    /// Decimal JSON number, echoed back with the digits it was sent with.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    #[schema(value_type = f64, example = 10.2)]
    pub preco: Decimal,
}

/// Payload for creating a comanda.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateComandaDto {
    #[serde(deserialize_with = "deserialize_string_or_number")]
    #[schema(example = "1")]
    pub id_usuario: String,
    #[schema(example = "Victor")]
    pub nome_usuario: String,
    #[schema(example = "47988591570")]
    pub telefone_usuario: String,
    pub produtos: Vec<ProdutoDto>,
}

/// Payload for appending products to an existing comanda.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AppendComandaDto {
    pub produtos: Vec<ProdutoDto>,
}

/// A comanda with all of its products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComandaDto {
    pub id_usuario: String,
    pub nome_usuario: String,
    pub telefone_usuario: String,
    pub produtos: Vec<ProdutoDto>,
}

/// Owner fields of a comanda, used by the list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComandaListItemDto {
    pub id_usuario: String,
    pub nome_usuario: String,
    pub telefone_usuario: String,
}

/// Accepts the owner id either as a JSON string or as a JSON integer.
fn deserialize_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(value) => Ok(value),
        serde_json::Value::Number(value) if value.is_i64() || value.is_u64() => {
            Ok(value.to_string())
        }
        other => Err(D::Error::custom(format!(
            "expected a string or an integer, found {}",
            other
        ))),
    }
}
