use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use tracing::debug;

use models::wishlist::{self, Wishlist, WishlistInput};
use models::{fumetto, utente, wishlist_fumetto};

use crate::errors::ServiceError;
use crate::repository::{Repository, WishlistRepository};

/// SeaORM-backed wishlist store. Items are kept in `wishlist_fumetto`, one
/// row per comic, ordered by `posizione`.
pub struct SeaOrmWishlistRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmWishlistRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

async fn load_items<C: ConnectionTrait>(conn: &C, wishlist_id: i32) -> Result<Vec<fumetto::Model>, ServiceError> {
    let rows = wishlist_fumetto::Entity::find()
        .filter(wishlist_fumetto::Column::WishlistId.eq(wishlist_id))
        .order_by_asc(wishlist_fumetto::Column::Posizione)
        .find_also_related(fumetto::Entity)
        .all(conn)
        .await?;
    Ok(rows.into_iter().filter_map(|(_, f)| f).collect())
}

/// Fetch the requested comics in request order; unknown ids are a payload error.
async fn resolve_items<C: ConnectionTrait>(conn: &C, ids: &[i32]) -> Result<Vec<fumetto::Model>, ServiceError> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    let mut found: HashMap<i32, fumetto::Model> = fumetto::Entity::find()
        .filter(fumetto::Column::FumettoId.is_in(ids.iter().copied()))
        .all(conn)
        .await?
        .into_iter()
        .map(|f| (f.fumetto_id, f))
        .collect();
    ids.iter()
        .map(|id| {
            found
                .remove(id)
                .ok_or_else(|| ServiceError::Validation(format!("fumetto {id} does not exist")))
        })
        .collect()
}

/// The owner must exist and must not already own a different wishlist.
async fn check_owner<C: ConnectionTrait>(conn: &C, owner: Option<i32>, current: Option<i32>) -> Result<(), ServiceError> {
    let Some(utente_id) = owner else { return Ok(()) };
    if utente::Entity::find_by_id(utente_id).one(conn).await?.is_none() {
        return Err(ServiceError::Validation(format!("utente {utente_id} does not exist")));
    }
    let owned = wishlist::Entity::find()
        .filter(wishlist::Column::UtenteId.eq(utente_id))
        .one(conn)
        .await?;
    match owned {
        Some(w) if Some(w.wishlist_id) != current => {
            Err(ServiceError::Conflict(format!("utente {utente_id} already owns wishlist {}", w.wishlist_id)))
        }
        _ => Ok(()),
    }
}

async fn replace_links<C: ConnectionTrait>(conn: &C, wishlist_id: i32, item_ids: &[i32]) -> Result<(), ServiceError> {
    wishlist_fumetto::Entity::delete_many()
        .filter(wishlist_fumetto::Column::WishlistId.eq(wishlist_id))
        .exec(conn)
        .await?;
    if item_ids.is_empty() {
        return Ok(());
    }
    let rows = item_ids.iter().enumerate().map(|(pos, fumetto_id)| wishlist_fumetto::ActiveModel {
        wishlist_id: Set(wishlist_id),
        fumetto_id: Set(*fumetto_id),
        posizione: Set(pos as i32),
    });
    wishlist_fumetto::Entity::insert_many(rows).exec(conn).await?;
    Ok(())
}

#[async_trait]
impl Repository for SeaOrmWishlistRepository {
    type Record = Wishlist;
    type Input = WishlistInput;

    async fn insert(&self, input: WishlistInput) -> Result<Wishlist, ServiceError> {
        let txn = self.db.begin().await?;
        check_owner(&txn, input.utente_id, None).await?;
        let items = resolve_items(&txn, &input.fumetto_ids().unwrap_or_default()).await?;

        let row = wishlist::ActiveModel {
            wishlist_id: NotSet,
            data_creazione: Set(input.data_creazione),
            utente_id: Set(input.utente_id),
        }
        .insert(&txn)
        .await?;

        let mut created = Wishlist::new(row.data_creazione);
        created.set_owner(row.utente_id);
        created.assign_id(row.wishlist_id)?;
        created.set_items(items);
        replace_links(&txn, row.wishlist_id, &created.item_ids()).await?;
        txn.commit().await?;
        Ok(created)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Wishlist>, ServiceError> {
        let Some(row) = wishlist::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };
        let items = load_items(&self.db, id).await?;
        Ok(Some(Wishlist::from_row(row, items)))
    }

    async fn find_all(&self) -> Result<Vec<Wishlist>, ServiceError> {
        let rows = wishlist::Entity::find().order_by_asc(wishlist::Column::WishlistId).all(&self.db).await?;
        let links = wishlist_fumetto::Entity::find()
            .order_by_asc(wishlist_fumetto::Column::WishlistId)
            .order_by_asc(wishlist_fumetto::Column::Posizione)
            .find_also_related(fumetto::Entity)
            .all(&self.db)
            .await?;

        let mut by_wishlist: HashMap<i32, Vec<fumetto::Model>> = HashMap::new();
        for (link, f) in links {
            if let Some(f) = f {
                by_wishlist.entry(link.wishlist_id).or_default().push(f);
            }
        }
        debug!(wishlists = rows.len(), "wishlists_loaded");
        Ok(rows
            .into_iter()
            .map(|row| {
                let items = by_wishlist.remove(&row.wishlist_id).unwrap_or_default();
                Wishlist::from_row(row, items)
            })
            .collect())
    }

    async fn update(&self, id: i32, input: WishlistInput) -> Result<Option<Wishlist>, ServiceError> {
        let txn = self.db.begin().await?;
        let Some(existing) = wishlist::Entity::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };
        check_owner(&txn, input.utente_id, Some(id)).await?;

        let items = match input.fumetto_ids() {
            Some(ids) => {
                let items = resolve_items(&txn, &ids).await?;
                replace_links(&txn, id, &ids).await?;
                items
            }
            None => load_items(&txn, id).await?,
        };

        let mut am: wishlist::ActiveModel = existing.into();
        am.data_creazione = Set(input.data_creazione);
        am.utente_id = Set(input.utente_id);
        let row = am.update(&txn).await?;
        txn.commit().await?;
        Ok(Some(Wishlist::from_row(row, items)))
    }

    async fn delete_by_id(&self, id: i32) -> Result<bool, ServiceError> {
        let txn = self.db.begin().await?;
        wishlist_fumetto::Entity::delete_many()
            .filter(wishlist_fumetto::Column::WishlistId.eq(id))
            .exec(&txn)
            .await?;
        let res = wishlist::Entity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;
        Ok(res.rows_affected > 0)
    }
}

#[async_trait]
impl WishlistRepository for SeaOrmWishlistRepository {
    async fn link_item(&self, wishlist_id: i32, fumetto_id: i32) -> Result<Option<Wishlist>, ServiceError> {
        let txn = self.db.begin().await?;
        let Some(row) = wishlist::Entity::find_by_id(wishlist_id).one(&txn).await? else {
            return Ok(None);
        };
        if fumetto::Entity::find_by_id(fumetto_id).one(&txn).await?.is_none() {
            return Err(ServiceError::not_found("fumetto"));
        }

        let last = wishlist_fumetto::Entity::find()
            .filter(wishlist_fumetto::Column::WishlistId.eq(wishlist_id))
            .order_by_desc(wishlist_fumetto::Column::Posizione)
            .one(&txn)
            .await?;
        let link = wishlist_fumetto::ActiveModel {
            wishlist_id: Set(wishlist_id),
            fumetto_id: Set(fumetto_id),
            posizione: Set(last.map_or(0, |l| l.posizione + 1)),
        };
        // an existing link keeps its position
        wishlist_fumetto::Entity::insert(link)
            .on_conflict(
                OnConflict::columns([wishlist_fumetto::Column::WishlistId, wishlist_fumetto::Column::FumettoId])
                    .do_nothing()
                    .to_owned(),
            )
            .do_nothing()
            .exec(&txn)
            .await?;

        let items = load_items(&txn, wishlist_id).await?;
        txn.commit().await?;
        Ok(Some(Wishlist::from_row(row, items)))
    }

    async fn unlink_item(&self, wishlist_id: i32, fumetto_id: i32) -> Result<Option<Wishlist>, ServiceError> {
        let txn = self.db.begin().await?;
        let Some(row) = wishlist::Entity::find_by_id(wishlist_id).one(&txn).await? else {
            return Ok(None);
        };
        wishlist_fumetto::Entity::delete_many()
            .filter(wishlist_fumetto::Column::WishlistId.eq(wishlist_id))
            .filter(wishlist_fumetto::Column::FumettoId.eq(fumetto_id))
            .exec(&txn)
            .await?;
        let items = load_items(&txn, wishlist_id).await?;
        txn.commit().await?;
        Ok(Some(Wishlist::from_row(row, items)))
    }
}
