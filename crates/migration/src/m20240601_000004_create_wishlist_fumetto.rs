//! Join table for the wishlist <-> fumetto many-to-many.
//!
//! `posizione` keeps insertion order; the composite key forbids duplicates.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WishlistFumetto::Table)
                    .if_not_exists()
                    .col(integer(WishlistFumetto::WishlistId))
                    .col(integer(WishlistFumetto::FumettoId))
                    .col(integer(WishlistFumetto::Posizione))
                    .primary_key(
                        Index::create()
                            .col(WishlistFumetto::WishlistId)
                            .col(WishlistFumetto::FumettoId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_wishlist_fumetto_wishlist")
                            .from(WishlistFumetto::Table, WishlistFumetto::WishlistId)
                            .to(Wishlist::Table, Wishlist::WishlistId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_wishlist_fumetto_fumetto")
                            .from(WishlistFumetto::Table, WishlistFumetto::FumettoId)
                            .to(Fumetto::Table, Fumetto::FumettoId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(WishlistFumetto::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum WishlistFumetto { Table, WishlistId, FumettoId, Posizione }

#[derive(DeriveIden)]
enum Wishlist { Table, WishlistId }

#[derive(DeriveIden)]
enum Fumetto { Table, FumettoId }
