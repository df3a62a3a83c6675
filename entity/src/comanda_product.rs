use sea_orm::entity::prelude::*;

/// A single line item of a comanda. Row order (`id`) is insertion order.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "comanda_product")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub comanda_id: i32,
    pub product_id: i64,
    pub name: String,
    /// Unit price as decimal text, kept exactly as received.
    pub price: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::comanda::Entity",
        from = "Column::ComandaId",
        to = "super::comanda::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Comanda,
}

impl Related<super::comanda::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comanda.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
