use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

use models::fumetto::{self, FumettoInput};
use models::wishlist_fumetto;

use crate::errors::ServiceError;
use crate::repository::Repository;

/// SeaORM-backed comic catalogue. Deleting a comic drops it from every wishlist.
pub struct SeaOrmFumettoRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmFumettoRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl Repository for SeaOrmFumettoRepository {
    type Record = fumetto::Model;
    type Input = FumettoInput;

    async fn insert(&self, input: FumettoInput) -> Result<fumetto::Model, ServiceError> {
        let am = fumetto::ActiveModel {
            fumetto_id: NotSet,
            titolo: Set(input.titolo),
            autore: Set(input.autore),
            editore: Set(input.editore),
            descrizione: Set(input.descrizione),
            data_pubblicazione: Set(input.data_pubblicazione),
            disponibile_per_asta: Set(input.disponibile_per_asta),
            categoria_fumetto: Set(input.categoria_fumetto),
        };
        Ok(am.insert(&self.db).await?)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<fumetto::Model>, ServiceError> {
        Ok(fumetto::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn find_all(&self) -> Result<Vec<fumetto::Model>, ServiceError> {
        Ok(fumetto::Entity::find().order_by_asc(fumetto::Column::FumettoId).all(&self.db).await?)
    }

    async fn update(&self, id: i32, input: FumettoInput) -> Result<Option<fumetto::Model>, ServiceError> {
        let Some(existing) = fumetto::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };
        let mut am: fumetto::ActiveModel = existing.into();
        am.titolo = Set(input.titolo);
        am.autore = Set(input.autore);
        am.editore = Set(input.editore);
        am.descrizione = Set(input.descrizione);
        am.data_pubblicazione = Set(input.data_pubblicazione);
        am.disponibile_per_asta = Set(input.disponibile_per_asta);
        am.categoria_fumetto = Set(input.categoria_fumetto);
        Ok(Some(am.update(&self.db).await?))
    }

    async fn delete_by_id(&self, id: i32) -> Result<bool, ServiceError> {
        let txn = self.db.begin().await?;
        wishlist_fumetto::Entity::delete_many()
            .filter(wishlist_fumetto::Column::FumettoId.eq(id))
            .exec(&txn)
            .await?;
        let res = fumetto::Entity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;
        Ok(res.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{date, fumetto_input, get_db};
    use crate::wishlist::SeaOrmWishlistRepository;
    use models::wishlist::{FumettoRef, WishlistInput};

    #[tokio::test]
    async fn deleting_comic_drops_it_from_wishlists() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let fumetti = SeaOrmFumettoRepository::new(db.clone());
        let wishlists = SeaOrmWishlistRepository::new(db);

        let a = fumetti.insert(fumetto_input("Diabolik")).await?;
        let b = fumetti.insert(fumetto_input("Zagor")).await?;
        let w = wishlists
            .insert(WishlistInput {
                data_creazione: date(2024, 5, 1),
                utente_id: None,
                fumetti: Some(vec![FumettoRef { fumetto_id: a.fumetto_id }, FumettoRef { fumetto_id: b.fumetto_id }]),
            })
            .await?;
        let wid = w.id().expect("saved");

        assert!(fumetti.delete_by_id(a.fumetto_id).await?);
        let reloaded = wishlists.find_by_id(wid).await?.expect("wishlist survives");
        assert_eq!(reloaded.item_ids(), vec![b.fumetto_id]);
        Ok(())
    }
}
