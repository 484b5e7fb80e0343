#![cfg(test)]
use chrono::NaiveDate;
use sea_orm::DatabaseConnection;
use migration::MigratorTrait;
use models::db::connect_in_memory;
use models::fumetto::{CategoriaFumetto, FumettoInput};
use models::utente::{RuoloUtente, UtenteInput};

/// Every call yields its own in-memory database, migrated from scratch.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = connect_in_memory().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn utente_input(email: &str) -> UtenteInput {
    UtenteInput {
        nome: "Mario".into(),
        cognome: "Rossi".into(),
        email: email.into(),
        password: "segreta123".into(),
        indirizzo: Some("Via Roma 1".into()),
        data_registrazione: date(2024, 1, 10),
        ruolo_utente: RuoloUtente::Cliente,
        data_inizio_abbonamento: None,
        data_fine_abbonamento: None,
        abbonamento_id: None,
    }
}

pub fn fumetto_input(titolo: &str) -> FumettoInput {
    FumettoInput {
        titolo: titolo.into(),
        autore: "Hugo Pratt".into(),
        editore: "Rizzoli".into(),
        descrizione: None,
        data_pubblicazione: date(1967, 7, 1),
        disponibile_per_asta: false,
        categoria_fumetto: CategoriaFumetto::Azione,
    }
}
