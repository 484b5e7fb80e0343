//! Create `ordine`, owned by a user; deleting the user drops their orders.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ordine::Table)
                    .if_not_exists()
                    .col(pk_auto(Ordine::OrdineId))
                    .col(double(Ordine::PrezzoFinale))
                    .col(date(Ordine::DataOrdine))
                    .col(string_len(Ordine::StatoOrdine, 16))
                    .col(integer(Ordine::UtenteId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ordine_utente")
                            .from(Ordine::Table, Ordine::UtenteId)
                            .to(Utente::Table, Utente::UtenteId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Ordine::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Ordine { Table, OrdineId, PrezzoFinale, DataOrdine, StatoOrdine, UtenteId }

#[derive(DeriveIden)]
enum Utente { Table, UtenteId }
