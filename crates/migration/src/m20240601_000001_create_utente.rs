//! Create `utente` table.
//!
//! Passwords are stored as argon2 PHC strings, never in clear. Dropping a
//! subscription only clears the user's reference to it.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Utente::Table)
                    .if_not_exists()
                    .col(pk_auto(Utente::UtenteId))
                    .col(string_len(Utente::Nome, 128))
                    .col(string_len(Utente::Cognome, 128))
                    .col(string_len(Utente::Email, 255).unique_key())
                    .col(string_len(Utente::PasswordHash, 255))
                    .col(string_len_null(Utente::Indirizzo, 255))
                    .col(date(Utente::DataRegistrazione))
                    .col(string_len(Utente::RuoloUtente, 16))
                    .col(date_null(Utente::DataInizioAbbonamento))
                    .col(date_null(Utente::DataFineAbbonamento))
                    .col(integer_null(Utente::AbbonamentoId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_utente_abbonamento")
                            .from(Utente::Table, Utente::AbbonamentoId)
                            .to(Abbonamento::Table, Abbonamento::AbbonamentoId)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Utente::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Utente {
    Table,
    UtenteId,
    Nome,
    Cognome,
    Email,
    PasswordHash,
    Indirizzo,
    DataRegistrazione,
    RuoloUtente,
    DataInizioAbbonamento,
    DataFineAbbonamento,
    AbbonamentoId,
}

#[derive(DeriveIden)]
enum Abbonamento { Table, AbbonamentoId }
