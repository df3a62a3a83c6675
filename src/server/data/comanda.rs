//! Comanda data repository for database operations.
//!
//! This module provides the `ComandaRepository` for reading and writing comandas and
//! their line items. Writes touching more than one row run inside a single transaction.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, ModelTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::comanda::{Comanda, CreateComandaParams, Product};

/// Repository providing database operations for comanda management.
pub struct ComandaRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ComandaRepository<'a> {
    /// Creates a new ComandaRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ComandaRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all comandas with their line items.
    ///
    /// Comandas are returned in creation order, line items in insertion order.
    ///
    /// # Returns
    /// - `Ok(Vec<Comanda>)` - All comandas (empty if none exist)
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_all(&self) -> Result<Vec<Comanda>, DbErr> {
        let comandas = entity::prelude::Comanda::find()
            .order_by_asc(entity::comanda::Column::Id)
            .all(self.db)
            .await?;

        if comandas.is_empty() {
            return Ok(Vec::new());
        }

        let comanda_ids: Vec<i32> = comandas.iter().map(|c| c.id).collect();
        let products = entity::prelude::ComandaProduct::find()
            .filter(entity::comanda_product::Column::ComandaId.is_in(comanda_ids))
            .order_by_asc(entity::comanda_product::Column::Id)
            .all(self.db)
            .await?;

        let mut products_by_comanda: HashMap<i32, Vec<entity::comanda_product::Model>> =
            HashMap::new();
        for product in products {
            products_by_comanda
                .entry(product.comanda_id)
                .or_default()
                .push(product);
        }

        comandas
            .into_iter()
            .map(|comanda| {
                let products = products_by_comanda.remove(&comanda.id).unwrap_or_default();
                Comanda::from_entity(comanda, products)
            })
            .collect()
    }

    /// Finds the comanda of an owner.
    ///
    /// Owners are expected to have a single comanda. If several exist the oldest one
    /// is returned.
    ///
    /// # Arguments
    /// - `owner_id` - Identifier of the owning user
    ///
    /// # Returns
    /// - `Ok(Some(Comanda))` - The owner's comanda with its line items
    /// - `Ok(None)` - The owner has no comanda
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_owner(&self, owner_id: &str) -> Result<Option<Comanda>, DbErr> {
        let Some(comanda) = find_first_by_owner(self.db, owner_id).await? else {
            return Ok(None);
        };

        let products = comanda
            .find_related(entity::prelude::ComandaProduct)
            .order_by_asc(entity::comanda_product::Column::Id)
            .all(self.db)
            .await?;

        Comanda::from_entity(comanda, products).map(Some)
    }

    /// Creates a comanda together with its initial line items.
    ///
    /// # Arguments
    /// - `params` - Owner fields and initial products
    ///
    /// # Returns
    /// - `Ok(Comanda)` - The stored comanda
    /// - `Err(DbErr)` - Database error, nothing is persisted
    pub async fn create(&self, params: CreateComandaParams) -> Result<Comanda, DbErr> {
        let txn = self.db.begin().await?;

        let comanda = entity::comanda::ActiveModel {
            owner_id: ActiveValue::Set(params.owner_id),
            owner_name: ActiveValue::Set(params.owner_name),
            owner_phone: ActiveValue::Set(params.owner_phone),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let products = insert_products(&txn, comanda.id, params.products).await?;

        txn.commit().await?;

        Comanda::from_entity(comanda, products)
    }

    /// Appends line items to the comanda of an owner.
    ///
    /// Only the comanda `find_by_owner` would return is modified.
    ///
    /// # Arguments
    /// - `owner_id` - Identifier of the owning user
    /// - `products` - Products to append, in order
    ///
    /// # Returns
    /// - `Ok(1)` - The owner's comanda was found and the products appended
    /// - `Ok(0)` - The owner has no comanda, nothing was written
    /// - `Err(DbErr)` - Database error, nothing is persisted
    pub async fn append_products(
        &self,
        owner_id: &str,
        products: Vec<Product>,
    ) -> Result<u64, DbErr> {
        let txn = self.db.begin().await?;

        let Some(comanda) = find_first_by_owner(&txn, owner_id).await? else {
            txn.rollback().await?;
            return Ok(0);
        };

        insert_products(&txn, comanda.id, products).await?;

        txn.commit().await?;

        Ok(1)
    }

    /// Deletes every comanda of an owner along with their line items.
    ///
    /// # Arguments
    /// - `owner_id` - Identifier of the owning user
    ///
    /// # Returns
    /// - `Ok(count)` - Number of comandas removed (0 if the owner had none)
    /// - `Err(DbErr)` - Database error, nothing is removed
    pub async fn delete_by_owner(&self, owner_id: &str) -> Result<u64, DbErr> {
        let txn = self.db.begin().await?;

        let comanda_ids: Vec<i32> = entity::prelude::Comanda::find()
            .filter(entity::comanda::Column::OwnerId.eq(owner_id))
            .all(&txn)
            .await?
            .into_iter()
            .map(|c| c.id)
            .collect();

        if comanda_ids.is_empty() {
            txn.rollback().await?;
            return Ok(0);
        }

        entity::prelude::ComandaProduct::delete_many()
            .filter(entity::comanda_product::Column::ComandaId.is_in(comanda_ids.clone()))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Comanda::delete_many()
            .filter(entity::comanda::Column::Id.is_in(comanda_ids))
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(result.rows_affected)
    }
}

/// Oldest comanda of an owner, without line items.
async fn find_first_by_owner<C: ConnectionTrait>(
    conn: &C,
    owner_id: &str,
) -> Result<Option<entity::comanda::Model>, DbErr> {
    entity::prelude::Comanda::find()
        .filter(entity::comanda::Column::OwnerId.eq(owner_id))
        .order_by_asc(entity::comanda::Column::Id)
        .one(conn)
        .await
}

/// Inserts line items for a comanda, preserving the given order.
async fn insert_products<C: ConnectionTrait>(
    conn: &C,
    comanda_id: i32,
    products: Vec<Product>,
) -> Result<Vec<entity::comanda_product::Model>, DbErr> {
    let mut inserted = Vec::with_capacity(products.len());

    for product in products {
        let model = entity::comanda_product::ActiveModel {
            comanda_id: ActiveValue::Set(comanda_id),
            product_id: ActiveValue::Set(product.id),
            name: ActiveValue::Set(product.name),
            price: ActiveValue::Set(product.price.to_string()),
            ..Default::default()
        }
        .insert(conn)
        .await?;

        inserted.push(model);
    }

    Ok(inserted)
}
