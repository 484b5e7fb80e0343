use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use tracing::info;

use models::utente::{self, UtenteInput};
use models::{wishlist, wishlist_fumetto};

use crate::errors::ServiceError;
use crate::password::hash_password;
use crate::repository::Repository;

/// SeaORM-backed user repository. Passwords are hashed before storage and a
/// user's wishlist is removed together with the user.
pub struct SeaOrmUtenteRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmUtenteRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl Repository for SeaOrmUtenteRepository {
    type Record = utente::Model;
    type Input = UtenteInput;

    async fn insert(&self, input: UtenteInput) -> Result<utente::Model, ServiceError> {
        let password_hash = hash_password(&input.password)?;
        let am = utente::ActiveModel {
            utente_id: NotSet,
            nome: Set(input.nome),
            cognome: Set(input.cognome),
            email: Set(input.email),
            password_hash: Set(password_hash),
            indirizzo: Set(input.indirizzo),
            data_registrazione: Set(input.data_registrazione),
            ruolo_utente: Set(input.ruolo_utente),
            data_inizio_abbonamento: Set(input.data_inizio_abbonamento),
            data_fine_abbonamento: Set(input.data_fine_abbonamento),
            abbonamento_id: Set(input.abbonamento_id),
        };
        Ok(am.insert(&self.db).await?)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<utente::Model>, ServiceError> {
        Ok(utente::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn find_all(&self) -> Result<Vec<utente::Model>, ServiceError> {
        Ok(utente::Entity::find().order_by_asc(utente::Column::UtenteId).all(&self.db).await?)
    }

    async fn update(&self, id: i32, input: UtenteInput) -> Result<Option<utente::Model>, ServiceError> {
        let Some(existing) = utente::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };
        let mut am: utente::ActiveModel = existing.into();
        am.nome = Set(input.nome);
        am.cognome = Set(input.cognome);
        am.email = Set(input.email);
        am.password_hash = Set(hash_password(&input.password)?);
        am.indirizzo = Set(input.indirizzo);
        am.data_registrazione = Set(input.data_registrazione);
        am.ruolo_utente = Set(input.ruolo_utente);
        am.data_inizio_abbonamento = Set(input.data_inizio_abbonamento);
        am.data_fine_abbonamento = Set(input.data_fine_abbonamento);
        am.abbonamento_id = Set(input.abbonamento_id);
        Ok(Some(am.update(&self.db).await?))
    }

    async fn delete_by_id(&self, id: i32) -> Result<bool, ServiceError> {
        let txn = self.db.begin().await?;
        if utente::Entity::find_by_id(id).one(&txn).await?.is_none() {
            return Ok(false);
        }

        // orphan removal: the owned wishlist goes first, with its join rows
        let owned = wishlist::Entity::find()
            .filter(wishlist::Column::UtenteId.eq(id))
            .one(&txn)
            .await?;
        if let Some(w) = owned {
            wishlist_fumetto::Entity::delete_many()
                .filter(wishlist_fumetto::Column::WishlistId.eq(w.wishlist_id))
                .exec(&txn)
                .await?;
            wishlist::Entity::delete_by_id(w.wishlist_id).exec(&txn).await?;
            info!(utente_id = id, wishlist_id = w.wishlist_id, "owned_wishlist_removed");
        }

        let res = utente::Entity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;
        Ok(res.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::password::verify_password;
    use crate::test_support::{date, get_db, utente_input};
    use crate::wishlist::SeaOrmWishlistRepository;
    use models::wishlist::WishlistInput;

    #[tokio::test]
    async fn password_is_stored_hashed() -> Result<(), anyhow::Error> {
        let repo = SeaOrmUtenteRepository::new(get_db().await?);
        let created = repo.insert(utente_input("mario@example.com")).await?;
        assert_ne!(created.password_hash, "segreta123");
        assert!(verify_password("segreta123", &created.password_hash)?);

        let json = serde_json::to_value(&created)?;
        assert!(json.get("password").is_none());
        assert!(json.get("passwordHash").is_none());
        assert_eq!(json["ruoloUtente"], "CLIENTE");
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_email_is_a_conflict() -> Result<(), anyhow::Error> {
        let repo = SeaOrmUtenteRepository::new(get_db().await?);
        repo.insert(utente_input("dup@example.com")).await?;
        let err = repo.insert(utente_input("dup@example.com")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn deleting_owner_removes_wishlist() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let utenti = SeaOrmUtenteRepository::new(db.clone());
        let wishlists = SeaOrmWishlistRepository::new(db);

        let owner = utenti.insert(utente_input("owner@example.com")).await?;
        let w = wishlists
            .insert(WishlistInput { data_creazione: date(2024, 5, 1), utente_id: Some(owner.utente_id), fumetti: None })
            .await?;
        let wid = w.id().expect("saved");

        assert!(utenti.delete_by_id(owner.utente_id).await?);
        assert!(wishlists.find_by_id(wid).await?.is_none());
        assert!(!utenti.delete_by_id(owner.utente_id).await?);
        Ok(())
    }
}
