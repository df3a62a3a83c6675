//! Comanda service for business logic.
//!
//! This module provides the `ComandaService`, which turns repository results into
//! request-level errors. Lookups and writes that match no comanda become `NotFound`.

use sea_orm::DatabaseConnection;
use serde_json::json;

use crate::server::{
    data::comanda::ComandaRepository,
    error::AppError,
    model::comanda::{AppendComandaParams, Comanda, CreateComandaParams},
};

/// Message for every lookup or write that finds no comanda for the owner.
pub const COMANDA_NOT_FOUND_MESSAGE: &str = "A comanda não foi encontrada";

/// Message for a delete request without an owner id.
pub const MISSING_OWNER_ID_MESSAGE: &str = "Query parameter faltando";

/// Service providing business logic for comanda management.
pub struct ComandaService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ComandaService<'a> {
    /// Creates a new ComandaService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ComandaService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every comanda.
    ///
    /// # Returns
    /// - `Ok(Vec<Comanda>)` - All comandas, empty when none exist
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Comanda>, AppError> {
        let comandas = ComandaRepository::new(self.db).find_all().await?;
        Ok(comandas)
    }

    /// Retrieves the comanda of an owner.
    ///
    /// # Arguments
    /// - `owner_id` - Identifier of the owning user
    ///
    /// # Returns
    /// - `Ok(Comanda)` - The owner's comanda with its products
    /// - `Err(AppError::NotFound)` - The owner has no comanda
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_owner(&self, owner_id: &str) -> Result<Comanda, AppError> {
        ComandaRepository::new(self.db)
            .find_by_owner(owner_id)
            .await?
            .ok_or_else(|| comanda_not_found(owner_id))
    }

    /// Creates a comanda.
    ///
    /// # Arguments
    /// - `params` - Validated creation parameters
    ///
    /// # Returns
    /// - `Ok(Comanda)` - The stored comanda
    /// - `Err(AppError::DbErr)` - Database error, nothing persisted
    pub async fn create(&self, params: CreateComandaParams) -> Result<Comanda, AppError> {
        let comanda = ComandaRepository::new(self.db).create(params).await?;
        Ok(comanda)
    }

    /// Appends products to the comanda of an owner.
    ///
    /// # Arguments
    /// - `owner_id` - Identifier of the owning user
    /// - `params` - Validated products to append
    ///
    /// # Returns
    /// - `Ok(())` - Products appended
    /// - `Err(AppError::NotFound)` - The owner has no comanda
    /// - `Err(AppError::DbErr)` - Database error, nothing persisted
    pub async fn append_products(
        &self,
        owner_id: &str,
        params: AppendComandaParams,
    ) -> Result<(), AppError> {
        let matched = ComandaRepository::new(self.db)
            .append_products(owner_id, params.products)
            .await?;

        if matched < 1 {
            return Err(comanda_not_found(owner_id));
        }

        Ok(())
    }

    /// Deletes the comandas of an owner.
    ///
    /// # Arguments
    /// - `owner_id` - Identifier of the owning user
    ///
    /// # Returns
    /// - `Ok(count)` - Number of comandas removed, at least 1
    /// - `Err(AppError::IncompletePayload)` - `owner_id` is blank
    /// - `Err(AppError::NotFound)` - The owner has no comanda
    /// - `Err(AppError::DbErr)` - Database error, nothing removed
    pub async fn delete_by_owner(&self, owner_id: &str) -> Result<u64, AppError> {
        if owner_id.trim().is_empty() {
            return Err(AppError::incomplete_payload_with(MISSING_OWNER_ID_MESSAGE));
        }

        let removed = ComandaRepository::new(self.db)
            .delete_by_owner(owner_id)
            .await?;

        if removed < 1 {
            return Err(comanda_not_found(owner_id));
        }

        Ok(removed)
    }
}

fn comanda_not_found(owner_id: &str) -> AppError {
    AppError::not_found(COMANDA_NOT_FOUND_MESSAGE).with_details(json!({ "idUsuario": owner_id }))
}
