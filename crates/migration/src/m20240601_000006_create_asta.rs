//! Create `asta`: an auction over one copy, with the current best bidder.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Asta::Table)
                    .if_not_exists()
                    .col(pk_auto(Asta::AstaId))
                    .col(date(Asta::DataInizio))
                    .col(date(Asta::DataFine))
                    .col(double(Asta::OffertaCorrente))
                    .col(string_len(Asta::StatoAsta, 16))
                    .col(integer(Asta::CopiaFumettoId))
                    .col(integer_null(Asta::UtenteMiglioreOffertaId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_asta_copia_fumetto")
                            .from(Asta::Table, Asta::CopiaFumettoId)
                            .to(CopiaFumetto::Table, CopiaFumetto::CopiaFumettoId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_asta_utente_migliore_offerta")
                            .from(Asta::Table, Asta::UtenteMiglioreOffertaId)
                            .to(Utente::Table, Utente::UtenteId)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Asta::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Asta { Table, AstaId, DataInizio, DataFine, OffertaCorrente, StatoAsta, CopiaFumettoId, UtenteMiglioreOffertaId }

#[derive(DeriveIden)]
enum CopiaFumetto { Table, CopiaFumettoId }

#[derive(DeriveIden)]
enum Utente { Table, UtenteId }
