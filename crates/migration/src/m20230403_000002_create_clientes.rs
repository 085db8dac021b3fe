//! Create `clientes` table.
//!
//! `region_id` is nullable: a client may reference no region, and deleting
//! a region clears the reference instead of cascading.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Clientes::Table)
                    .if_not_exists()
                    .col(pk_auto(Clientes::Id))
                    .col(string(Clientes::Nombre).not_null())
                    .col(string(Clientes::Identificacion).not_null())
                    .col(string(Clientes::Telefono).not_null())
                    .col(string(Clientes::Correo).not_null())
                    .col(timestamp_with_time_zone(Clientes::FechaRegistro).not_null())
                    .col(integer_null(Clientes::RegionId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_clientes_region")
                            .from(Clientes::Table, Clientes::RegionId)
                            .to(Region::Table, Region::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Clientes::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Clientes {
    Table,
    Id,
    Nombre,
    Identificacion,
    Telefono,
    Correo,
    FechaRegistro,
    RegionId,
}

#[derive(DeriveIden)]
enum Region { Table, Id }
