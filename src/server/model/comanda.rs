//! Comanda domain models and parameters.
//!
//! This is the single place where the wire naming (`idUsuario`, `nomeUsuario`,
//! `telefoneUsuario`, `produtos[].nome`, `produtos[].preco`) is mapped to the stored
//! naming (`owner_id`, `owner_name`, `owner_phone`, `name`, `price`) and back.

use rust_decimal::Decimal;
use sea_orm::DbErr;
use serde_json::Value;

use crate::{
    model::comanda::{
        AppendComandaDto, ComandaDto, ComandaListItemDto, CreateComandaDto, ProdutoDto,
    },
    server::{
        error::AppError,
        util::parse::{parse_payload, require_produtos_array, require_text},
    },
};

/// A line item of a comanda.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Product identifier supplied by the client.
    pub id: i64,
    /// Product display name.
    pub name: String,
    /// Unit price, with the scale it was sent with.
    pub price: Decimal,
}

impl Product {
    /// Converts a stored line item to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Product)` - The line item
    /// - `Err(DbErr::Type)` - The stored price is not a decimal
    pub fn from_entity(entity: entity::comanda_product::Model) -> Result<Self, DbErr> {
        let price = entity.price.parse::<Decimal>().map_err(|e| {
            DbErr::Type(format!(
                "Invalid price '{}' for comanda_product {}: {}",
                entity.price, entity.id, e
            ))
        })?;

        Ok(Self {
            id: entity.product_id,
            name: entity.name,
            price,
        })
    }

    pub fn from_dto(dto: ProdutoDto) -> Self {
        Self {
            id: dto.id,
            name: dto.nome,
            price: dto.preco,
        }
    }

    pub fn into_dto(self) -> ProdutoDto {
        ProdutoDto {
            id: self.id,
            nome: self.name,
            preco: self.price,
        }
    }
}

/// A stored comanda with its line items in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Comanda {
    /// Internal row id, never exposed through the API.
    pub id: i32,
    /// Identifier of the user owning the comanda, used as the lookup key.
    pub owner_id: String,
    pub owner_name: String,
    pub owner_phone: String,
    pub products: Vec<Product>,
}

impl Comanda {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The comanda row
    /// - `products` - Line item rows of that comanda, already in insertion order
    pub fn from_entity(
        entity: entity::comanda::Model,
        products: Vec<entity::comanda_product::Model>,
    ) -> Result<Self, DbErr> {
        let products = products
            .into_iter()
            .map(Product::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            id: entity.id,
            owner_id: entity.owner_id,
            owner_name: entity.owner_name,
            owner_phone: entity.owner_phone,
            products,
        })
    }

    /// Converts to the full DTO returned by the get-one and create endpoints.
    pub fn into_dto(self) -> ComandaDto {
        ComandaDto {
            id_usuario: self.owner_id,
            nome_usuario: self.owner_name,
            telefone_usuario: self.owner_phone,
            produtos: self.products.into_iter().map(Product::into_dto).collect(),
        }
    }

    /// Converts to the owner-only DTO returned by the list endpoint.
    pub fn into_list_item_dto(self) -> ComandaListItemDto {
        ComandaListItemDto {
            id_usuario: self.owner_id,
            nome_usuario: self.owner_name,
            telefone_usuario: self.owner_phone,
        }
    }
}

/// Parameters for creating a comanda.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateComandaParams {
    pub owner_id: String,
    pub owner_name: String,
    pub owner_phone: String,
    pub products: Vec<Product>,
}

impl CreateComandaParams {
    /// Validates and converts a raw create payload.
    ///
    /// The `produtos` array check runs first so that its dedicated message is reported
    /// even when other fields are also missing. Owner fields must be non-blank; name and
    /// phone are trimmed.
    ///
    /// # Arguments
    /// - `payload` - Raw JSON body of the request
    ///
    /// # Returns
    /// - `Ok(CreateComandaParams)` - Validated parameters
    /// - `Err(AppError::IncompletePayload)` - `produtos` is not an array, a field is
    ///   missing, has the wrong type or is blank
    pub fn from_payload(payload: Value) -> Result<Self, AppError> {
        require_produtos_array(&payload)?;
        let dto: CreateComandaDto = parse_payload(payload)?;

        Self::from_dto(dto)
    }

    pub fn from_dto(dto: CreateComandaDto) -> Result<Self, AppError> {
        // Owner ids are lookup keys and are stored exactly as sent.
        require_text("idUsuario", &dto.id_usuario)?;

        Ok(Self {
            owner_id: dto.id_usuario,
            owner_name: require_text("nomeUsuario", &dto.nome_usuario)?,
            owner_phone: require_text("telefoneUsuario", &dto.telefone_usuario)?,
            products: dto.produtos.into_iter().map(Product::from_dto).collect(),
        })
    }
}

/// Parameters for appending products to an existing comanda.
#[derive(Debug, Clone, PartialEq)]
pub struct AppendComandaParams {
    pub products: Vec<Product>,
}

impl AppendComandaParams {
    /// Validates and converts a raw append payload.
    ///
    /// # Returns
    /// - `Ok(AppendComandaParams)` - Well-formed products, possibly none
    /// - `Err(AppError::IncompletePayload)` - `produtos` is not an array or contains a
    ///   malformed product
    pub fn from_payload(payload: Value) -> Result<Self, AppError> {
        require_produtos_array(&payload)?;
        let dto: AppendComandaDto = parse_payload(payload)?;

        Ok(Self {
            products: dto.produtos.into_iter().map(Product::from_dto).collect(),
        })
    }
}
