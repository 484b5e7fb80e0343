use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Join table: reverse lookup when a fumetto is deleted
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_wishlist_fumetto_fumetto")
                    .table(WishlistFumetto::Table)
                    .col(WishlistFumetto::FumettoId)
                    .to_owned(),
            )
            .await?;

        // Fumetto: catalogue browsing by category
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_fumetto_categoria")
                    .table(Fumetto::Table)
                    .col(Fumetto::CategoriaFumetto)
                    .to_owned(),
            )
            .await?;

        // Foreign-key lookups of the shop tables
        for (name, table, col) in fk_indexes() {
            manager
                .create_index(Index::create().if_not_exists().name(name).table(table).col(col).to_owned())
                .await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (name, table, _) in fk_indexes() {
            manager.drop_index(Index::drop().name(name).table(table).to_owned()).await?;
        }
        manager
            .drop_index(Index::drop().name("idx_fumetto_categoria").table(Fumetto::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_wishlist_fumetto_fumetto").table(WishlistFumetto::Table).to_owned())
            .await
    }
}

fn fk_indexes() -> Vec<(&'static str, DynIden, DynIden)> {
    vec![
        ("idx_copia_fumetto_fumetto", CopiaFumetto::Table.into_iden(), CopiaFumetto::FumettoId.into_iden()),
        ("idx_asta_copia_fumetto", Asta::Table.into_iden(), Asta::CopiaFumettoId.into_iden()),
        ("idx_ordine_utente", Ordine::Table.into_iden(), Ordine::UtenteId.into_iden()),
        ("idx_dettagli_ordine_ordine", DettagliOrdine::Table.into_iden(), DettagliOrdine::OrdineId.into_iden()),
    ]
}

#[derive(DeriveIden)]
enum CopiaFumetto { Table, FumettoId }

#[derive(DeriveIden)]
enum Asta { Table, CopiaFumettoId }

#[derive(DeriveIden)]
enum Ordine { Table, UtenteId }

#[derive(DeriveIden)]
enum DettagliOrdine { Table, OrdineId }

#[derive(DeriveIden)]
enum WishlistFumetto { Table, FumettoId }

#[derive(DeriveIden)]
enum Fumetto { Table, CategoriaFumetto }
