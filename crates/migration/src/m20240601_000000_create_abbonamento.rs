//! Create `abbonamento` table. Users point at it, so it comes first.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Abbonamento::Table)
                    .if_not_exists()
                    .col(pk_auto(Abbonamento::AbbonamentoId))
                    .col(string_len(Abbonamento::PianoAbbonamento, 16))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Abbonamento::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Abbonamento { Table, AbbonamentoId, PianoAbbonamento }
