use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Comanda::Table)
                    .if_not_exists()
                    .col(pk_auto(Comanda::Id))
                    .col(string(Comanda::OwnerId))
                    .col(string(Comanda::OwnerName))
                    .col(string(Comanda::OwnerPhone))
                    .to_owned(),
            )
            .await?;

        // Not unique, lookups take the oldest comanda of an owner
        manager
            .create_index(
                Index::create()
                    .name("idx_comanda_owner_id")
                    .table(Comanda::Table)
                    .col(Comanda::OwnerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Comanda::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Comanda {
    Table,
    Id,
    OwnerId,
    OwnerName,
    OwnerPhone,
}
