use sea_orm::entity::prelude::*;

/// A customer's running tab, looked up by the owning user's identifier.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "comanda")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub owner_id: String,
    pub owner_name: String,
    pub owner_phone: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::comanda_product::Entity")]
    ComandaProduct,
}

impl Related<super::comanda_product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ComandaProduct.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
