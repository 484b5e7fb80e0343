//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240601_000000_create_abbonamento;
mod m20240601_000001_create_utente;
mod m20240601_000002_create_fumetto;
mod m20240601_000003_create_wishlist;
mod m20240601_000004_create_wishlist_fumetto;
mod m20240601_000005_create_copia_fumetto;
mod m20240601_000006_create_asta;
mod m20240601_000007_create_ordine;
mod m20240601_000008_create_dettagli_ordine;
mod m20240601_000010_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240601_000000_create_abbonamento::Migration),
            Box::new(m20240601_000001_create_utente::Migration),
            Box::new(m20240601_000002_create_fumetto::Migration),
            Box::new(m20240601_000003_create_wishlist::Migration),
            Box::new(m20240601_000004_create_wishlist_fumetto::Migration),
            Box::new(m20240601_000005_create_copia_fumetto::Migration),
            Box::new(m20240601_000006_create_asta::Migration),
            Box::new(m20240601_000007_create_ordine::Migration),
            Box::new(m20240601_000008_create_dettagli_ordine::Migration),
            // Indexes should always be applied last
            Box::new(m20240601_000010_add_indexes::Migration),
        ]
    }
}
