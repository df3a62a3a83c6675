//! Comanda factory for creating test comandas with their line items.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test comandas.
///
/// Line items added with `product` are inserted after the comanda, in order.
///
/// # Example
///
/// ```rust,ignore
/// let comanda = ComandaFactory::new(&db)
///     .owner_id("1")
///     .product(1, "Burger", "10.2")
///     .product(2, "Soda", "5.0")
///     .build()
///     .await?;
/// ```
pub struct ComandaFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: String,
    owner_name: String,
    owner_phone: String,
    products: Vec<(i64, String, String)>,
}

impl<'a> ComandaFactory<'a> {
    /// Creates a new ComandaFactory with default values.
    ///
    /// Defaults:
    /// - owner_id: auto-incremented id as string
    /// - owner_name: `"Owner {id}"`
    /// - owner_phone: `"47900000000"`
    /// - products: none
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            owner_id: id.to_string(),
            owner_name: format!("Owner {}", id),
            owner_phone: "47900000000".to_string(),
            products: Vec::new(),
        }
    }

    pub fn owner_id(mut self, owner_id: impl Into<String>) -> Self {
        self.owner_id = owner_id.into();
        self
    }

    pub fn owner_name(mut self, owner_name: impl Into<String>) -> Self {
        self.owner_name = owner_name.into();
        self
    }

    pub fn owner_phone(mut self, owner_phone: impl Into<String>) -> Self {
        self.owner_phone = owner_phone.into();
        self
    }

    /// Appends a line item. `price` is the decimal text stored in the price column.
    pub fn product(
        mut self,
        id: i64,
        name: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        self.products.push((id, name.into(), price.into()));
        self
    }

    /// Builds and inserts the comanda and its line items into the database.
    ///
    /// # Returns
    /// - `Ok(entity::comanda::Model)` - Created comanda entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::comanda::Model, DbErr> {
        let comanda = entity::comanda::ActiveModel {
            owner_id: ActiveValue::Set(self.owner_id),
            owner_name: ActiveValue::Set(self.owner_name),
            owner_phone: ActiveValue::Set(self.owner_phone),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for (product_id, name, price) in self.products {
            entity::comanda_product::ActiveModel {
                comanda_id: ActiveValue::Set(comanda.id),
                product_id: ActiveValue::Set(product_id),
                name: ActiveValue::Set(name),
                price: ActiveValue::Set(price),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(comanda)
    }
}

/// Creates a comanda without line items for the owner.
///
/// Shorthand for `ComandaFactory::new(db).owner_id(owner_id).build().await`.
pub async fn create_comanda(
    db: &DatabaseConnection,
    owner_id: impl Into<String>,
) -> Result<entity::comanda::Model, DbErr> {
    ComandaFactory::new(db).owner_id(owner_id).build().await
}
