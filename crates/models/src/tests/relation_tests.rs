use anyhow::Result;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, NotSet, QueryFilter, QueryOrder, Set};

use super::setup_test_db;
use crate::abbonamento::{self, PianoAbbonamento};
use crate::asta::{self, StatoAsta};
use crate::copia_fumetto::{self, StatoCopiaFumetto};
use crate::fumetto::{self, CategoriaFumetto};
use crate::ordine::{self, StatoOrdine};
use crate::utente::{self, RuoloUtente};
use crate::{dettagli_ordine, wishlist, wishlist_fumetto};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

async fn insert_utente(db: &sea_orm::DatabaseConnection, email: &str) -> Result<utente::Model> {
    let am = utente::ActiveModel {
        utente_id: NotSet,
        nome: Set("Mario".into()),
        cognome: Set("Rossi".into()),
        email: Set(email.into()),
        password_hash: Set("hash".into()),
        indirizzo: Set(None),
        data_registrazione: Set(date(2024, 1, 1)),
        ruolo_utente: Set(RuoloUtente::Cliente),
        data_inizio_abbonamento: Set(None),
        data_fine_abbonamento: Set(None),
        abbonamento_id: Set(None),
    };
    Ok(am.insert(db).await?)
}

async fn insert_fumetto(db: &sea_orm::DatabaseConnection, titolo: &str) -> Result<fumetto::Model> {
    let am = fumetto::ActiveModel {
        fumetto_id: NotSet,
        titolo: Set(titolo.into()),
        autore: Set("Bonelli".into()),
        editore: Set("SBE".into()),
        descrizione: Set(None),
        data_pubblicazione: Set(date(1948, 9, 30)),
        disponibile_per_asta: Set(false),
        categoria_fumetto: Set(CategoriaFumetto::Azione),
    };
    Ok(am.insert(db).await?)
}

async fn insert_wishlist(db: &sea_orm::DatabaseConnection, owner: Option<i32>) -> Result<wishlist::Model> {
    let am = wishlist::ActiveModel {
        wishlist_id: NotSet,
        data_creazione: Set(date(2024, 5, 1)),
        utente_id: Set(owner),
    };
    Ok(am.insert(db).await?)
}

async fn link(db: &sea_orm::DatabaseConnection, wishlist_id: i32, fumetto_id: i32, posizione: i32) -> Result<()> {
    wishlist_fumetto::ActiveModel {
        wishlist_id: Set(wishlist_id),
        fumetto_id: Set(fumetto_id),
        posizione: Set(posizione),
    }
    .insert(db)
    .await?;
    Ok(())
}

async fn insert_copia(db: &sea_orm::DatabaseConnection, fumetto_id: i32) -> Result<copia_fumetto::Model> {
    let am = copia_fumetto::ActiveModel {
        copia_fumetto_id: NotSet,
        stato_copia_fumetto: Set(StatoCopiaFumetto::Nuovo),
        prezzo: Set(5.9),
        disponibile: Set(true),
        fumetto_id: Set(fumetto_id),
    };
    Ok(am.insert(db).await?)
}

async fn insert_ordine(db: &sea_orm::DatabaseConnection, utente_id: i32) -> Result<ordine::Model> {
    let am = ordine::ActiveModel {
        ordine_id: NotSet,
        prezzo_finale: Set(11.8),
        data_ordine: Set(date(2024, 5, 2)),
        stato_ordine: Set(StatoOrdine::InConsegna),
        utente_id: Set(utente_id),
    };
    Ok(am.insert(db).await?)
}

#[tokio::test]
async fn generated_ids_are_distinct() -> Result<()> {
    let db = setup_test_db().await?;
    let a = insert_fumetto(&db, "Tex").await?;
    let b = insert_fumetto(&db, "Zagor").await?;
    assert_ne!(a.fumetto_id, b.fumetto_id);
    Ok(())
}

#[tokio::test]
async fn related_fumetti_follow_position() -> Result<()> {
    let db = setup_test_db().await?;
    let w = insert_wishlist(&db, None).await?;
    let tex = insert_fumetto(&db, "Tex").await?;
    let zagor = insert_fumetto(&db, "Zagor").await?;
    link(&db, w.wishlist_id, zagor.fumetto_id, 0).await?;
    link(&db, w.wishlist_id, tex.fumetto_id, 1).await?;

    let items = w
        .find_related(fumetto::Entity)
        .order_by_asc(wishlist_fumetto::Column::Posizione)
        .all(&db)
        .await?;
    let titles: Vec<_> = items.iter().map(|f| f.titolo.as_str()).collect();
    assert_eq!(titles, vec!["Zagor", "Tex"]);
    Ok(())
}

#[tokio::test]
async fn duplicate_membership_is_rejected_by_key() -> Result<()> {
    let db = setup_test_db().await?;
    let w = insert_wishlist(&db, None).await?;
    let tex = insert_fumetto(&db, "Tex").await?;
    link(&db, w.wishlist_id, tex.fumetto_id, 0).await?;
    assert!(link(&db, w.wishlist_id, tex.fumetto_id, 1).await.is_err());
    Ok(())
}

#[tokio::test]
async fn one_wishlist_per_owner() -> Result<()> {
    let db = setup_test_db().await?;
    let u = insert_utente(&db, "mario@example.com").await?;
    insert_wishlist(&db, Some(u.utente_id)).await?;
    assert!(insert_wishlist(&db, Some(u.utente_id)).await.is_err());
    Ok(())
}

#[tokio::test]
async fn deleting_owner_cascades_to_wishlist_and_links() -> Result<()> {
    let db = setup_test_db().await?;
    let u = insert_utente(&db, "anna@example.com").await?;
    let w = insert_wishlist(&db, Some(u.utente_id)).await?;
    let tex = insert_fumetto(&db, "Tex").await?;
    link(&db, w.wishlist_id, tex.fumetto_id, 0).await?;

    utente::Entity::delete_by_id(u.utente_id).exec(&db).await?;

    assert!(wishlist::Entity::find_by_id(w.wishlist_id).one(&db).await?.is_none());
    let links = wishlist_fumetto::Entity::find()
        .filter(wishlist_fumetto::Column::WishlistId.eq(w.wishlist_id))
        .all(&db)
        .await?;
    assert!(links.is_empty());
    // the comic itself survives
    assert!(fumetto::Entity::find_by_id(tex.fumetto_id).one(&db).await?.is_some());
    Ok(())
}

#[tokio::test]
async fn owner_is_reachable_from_wishlist() -> Result<()> {
    let db = setup_test_db().await?;
    let u = insert_utente(&db, "luca@example.com").await?;
    let w = insert_wishlist(&db, Some(u.utente_id)).await?;
    let owner = w.find_related(utente::Entity).one(&db).await?;
    assert_eq!(owner.map(|o| o.email), Some("luca@example.com".to_string()));
    Ok(())
}

#[tokio::test]
async fn enums_round_trip_through_storage() -> Result<()> {
    let db = setup_test_db().await?;
    let f = insert_fumetto(&db, "Martin Mystère").await?;
    let found = fumetto::Entity::find_by_id(f.fumetto_id).one(&db).await?.unwrap();
    assert_eq!(found.categoria_fumetto, CategoriaFumetto::Azione);
    Ok(())
}

#[tokio::test]
async fn dropping_a_plan_clears_subscribers() -> Result<()> {
    let db = setup_test_db().await?;
    let plan = abbonamento::ActiveModel {
        abbonamento_id: NotSet,
        piano_abbonamento: Set(PianoAbbonamento::Annuale),
    }
    .insert(&db)
    .await?;
    let u = insert_utente(&db, "sub@example.com").await?;
    let mut am: utente::ActiveModel = u.clone().into();
    am.abbonamento_id = Set(Some(plan.abbonamento_id));
    am.update(&db).await?;

    abbonamento::Entity::delete_by_id(plan.abbonamento_id).exec(&db).await?;

    let reloaded = utente::Entity::find_by_id(u.utente_id).one(&db).await?.unwrap();
    assert_eq!(reloaded.abbonamento_id, None);
    Ok(())
}

#[tokio::test]
async fn copy_requires_an_existing_comic() -> Result<()> {
    let db = setup_test_db().await?;
    assert!(insert_copia(&db, 404).await.is_err());
    Ok(())
}

#[tokio::test]
async fn deleting_comic_drops_copies_and_auctions() -> Result<()> {
    let db = setup_test_db().await?;
    let tex = insert_fumetto(&db, "Tex").await?;
    let copia = insert_copia(&db, tex.fumetto_id).await?;
    let bidder = insert_utente(&db, "bid@example.com").await?;
    let am = asta::ActiveModel {
        asta_id: NotSet,
        data_inizio: Set(date(2024, 5, 1)),
        data_fine: Set(date(2024, 5, 8)),
        offerta_corrente: Set(7.0),
        stato_asta: Set(StatoAsta::InCorso),
        copia_fumetto_id: Set(copia.copia_fumetto_id),
        utente_migliore_offerta_id: Set(Some(bidder.utente_id)),
    };
    let auction = am.insert(&db).await?;

    fumetto::Entity::delete_by_id(tex.fumetto_id).exec(&db).await?;

    assert!(copia_fumetto::Entity::find_by_id(copia.copia_fumetto_id).one(&db).await?.is_none());
    assert!(asta::Entity::find_by_id(auction.asta_id).one(&db).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn order_lines_follow_their_order() -> Result<()> {
    let db = setup_test_db().await?;
    let u = insert_utente(&db, "buyer@example.com").await?;
    let tex = insert_fumetto(&db, "Tex").await?;
    let copia = insert_copia(&db, tex.fumetto_id).await?;
    let order = insert_ordine(&db, u.utente_id).await?;
    dettagli_ordine::ActiveModel {
        dettagli_ordine_id: NotSet,
        quantita_fumetti: Set(2),
        copia_fumetto_id: Set(copia.copia_fumetto_id),
        ordine_id: Set(order.ordine_id),
    }
    .insert(&db)
    .await?;

    let lines = order.find_related(dettagli_ordine::Entity).all(&db).await?;
    assert_eq!(lines.len(), 1);

    utente::Entity::delete_by_id(u.utente_id).exec(&db).await?;

    assert!(ordine::Entity::find_by_id(order.ordine_id).one(&db).await?.is_none());
    assert!(dettagli_ordine::Entity::find().all(&db).await?.is_empty());
    // the copy stays on sale
    assert!(copia_fumetto::Entity::find_by_id(copia.copia_fumetto_id).one(&db).await?.is_some());
    Ok(())
}
