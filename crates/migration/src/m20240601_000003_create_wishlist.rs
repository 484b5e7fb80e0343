//! Create `wishlist` table with a unique, cascading FK to `utente`.
//!
//! One wishlist per owner; deleting the owner removes the wishlist.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Wishlist::Table)
                    .if_not_exists()
                    .col(pk_auto(Wishlist::WishlistId))
                    .col(date(Wishlist::DataCreazione))
                    .col(integer_null(Wishlist::UtenteId).unique_key())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_wishlist_utente")
                            .from(Wishlist::Table, Wishlist::UtenteId)
                            .to(Utente::Table, Utente::UtenteId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Wishlist::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Wishlist { Table, WishlistId, DataCreazione, UtenteId }

#[derive(DeriveIden)]
enum Utente { Table, UtenteId }
