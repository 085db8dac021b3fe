use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Clients are looked up by region for the derived back-reference
        manager
            .create_index(
                Index::create()
                    .name("idx_clientes_region_id")
                    .table(Clientes::Table)
                    .col(Clientes::RegionId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_clientes_region_id").table(Clientes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Clientes { Table, RegionId }
