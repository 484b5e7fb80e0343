//! Create `dettagli_ordine`: order lines, one per copy, removed with either side.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DettagliOrdine::Table)
                    .if_not_exists()
                    .col(pk_auto(DettagliOrdine::DettagliOrdineId))
                    .col(integer(DettagliOrdine::QuantitaFumetti))
                    .col(integer(DettagliOrdine::CopiaFumettoId))
                    .col(integer(DettagliOrdine::OrdineId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dettagli_ordine_copia_fumetto")
                            .from(DettagliOrdine::Table, DettagliOrdine::CopiaFumettoId)
                            .to(CopiaFumetto::Table, CopiaFumetto::CopiaFumettoId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dettagli_ordine_ordine")
                            .from(DettagliOrdine::Table, DettagliOrdine::OrdineId)
                            .to(Ordine::Table, Ordine::OrdineId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(DettagliOrdine::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum DettagliOrdine { Table, DettagliOrdineId, QuantitaFumetti, CopiaFumettoId, OrdineId }

#[derive(DeriveIden)]
enum CopiaFumetto { Table, CopiaFumettoId }

#[derive(DeriveIden)]
enum Ordine { Table, OrdineId }
