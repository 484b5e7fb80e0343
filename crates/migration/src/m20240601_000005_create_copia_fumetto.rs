//! Create `copia_fumetto`: sellable physical copies of a catalogue comic.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CopiaFumetto::Table)
                    .if_not_exists()
                    .col(pk_auto(CopiaFumetto::CopiaFumettoId))
                    .col(string_len(CopiaFumetto::StatoCopiaFumetto, 16))
                    .col(double(CopiaFumetto::Prezzo))
                    .col(boolean(CopiaFumetto::Disponibile).default(true))
                    .col(integer(CopiaFumetto::FumettoId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_copia_fumetto_fumetto")
                            .from(CopiaFumetto::Table, CopiaFumetto::FumettoId)
                            .to(Fumetto::Table, Fumetto::FumettoId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(CopiaFumetto::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum CopiaFumetto { Table, CopiaFumettoId, StatoCopiaFumetto, Prezzo, Disponibile, FumettoId }

#[derive(DeriveIden)]
enum Fumetto { Table, FumettoId }
