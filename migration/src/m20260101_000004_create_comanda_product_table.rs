use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000003_create_comanda_table::Comanda;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ComandaProduct::Table)
                    .if_not_exists()
                    .col(pk_auto(ComandaProduct::Id))
                    .col(integer(ComandaProduct::ComandaId))
                    .col(big_integer(ComandaProduct::ProductId))
                    .col(string(ComandaProduct::Name))
                    .col(string(ComandaProduct::Price))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comanda_product_comanda_id")
                            .from(ComandaProduct::Table, ComandaProduct::ComandaId)
                            .to(Comanda::Table, Comanda::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_comanda_product_comanda_id")
                    .table(ComandaProduct::Table)
                    .col(ComandaProduct::ComandaId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ComandaProduct::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ComandaProduct {
    Table,
    Id,
    ComandaId,
    ProductId,
    Name,
    Price,
}
