use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Fumetto::Table)
                    .if_not_exists()
                    .col(pk_auto(Fumetto::FumettoId))
                    .col(string_len(Fumetto::Titolo, 255))
                    .col(string_len(Fumetto::Autore, 255))
                    .col(string_len(Fumetto::Editore, 255))
                    .col(text_null(Fumetto::Descrizione))
                    .col(date(Fumetto::DataPubblicazione))
                    .col(boolean(Fumetto::DisponibilePerAsta).default(false))
                    .col(string_len(Fumetto::CategoriaFumetto, 32))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Fumetto::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Fumetto {
    Table,
    FumettoId,
    Titolo,
    Autore,
    Editore,
    Descrizione,
    DataPubblicazione,
    DisponibilePerAsta,
    CategoriaFumetto,
}
