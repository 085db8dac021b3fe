//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20230403_000001_create_region;
mod m20230403_000002_create_clientes;
mod m20230403_000003_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20230403_000001_create_region::Migration),
            Box::new(m20230403_000002_create_clientes::Migration),
            // Indexes should always be applied last
            Box::new(m20230403_000003_add_indexes::Migration),
        ]
    }
}
