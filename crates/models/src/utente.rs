use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::validation::{self, Validate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuoloUtente {
    #[sea_orm(string_value = "ADMIN")]
    Admin,
    #[sea_orm(string_value = "CLIENTE")]
    Cliente,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "utente")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub utente_id: i32,
    pub nome: String,
    pub cognome: String,
    #[sea_orm(unique)]
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub indirizzo: Option<String>,
    pub data_registrazione: NaiveDate,
    pub ruolo_utente: RuoloUtente,
    pub data_inizio_abbonamento: Option<NaiveDate>,
    pub data_fine_abbonamento: Option<NaiveDate>,
    pub abbonamento_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::wishlist::Entity")]
    Wishlist,
    #[sea_orm(
        belongs_to = "super::abbonamento::Entity",
        from = "Column::AbbonamentoId",
        to = "super::abbonamento::Column::AbbonamentoId",
        on_delete = "SetNull"
    )]
    Abbonamento,
}

impl Related<super::wishlist::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Wishlist.def()
    }
}

impl Related<super::abbonamento::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Abbonamento.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Writable fields of a user, as sent by clients on create and update.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UtenteInput {
    pub nome: String,
    pub cognome: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub indirizzo: Option<String>,
    pub data_registrazione: NaiveDate,
    pub ruolo_utente: RuoloUtente,
    #[serde(default)]
    pub data_inizio_abbonamento: Option<NaiveDate>,
    #[serde(default)]
    pub data_fine_abbonamento: Option<NaiveDate>,
    #[serde(default)]
    pub abbonamento_id: Option<i32>,
}

pub fn validate_email(email: &str) -> Result<(), ModelError> {
    let Some((local, domain)) = email.split_once('@') else {
        return Err(ModelError::Validation("invalid email".into()));
    };
    if local.is_empty() || domain.is_empty() || email.chars().any(char::is_whitespace) {
        return Err(ModelError::Validation("invalid email".into()));
    }
    validation::max_len("email", email, 255)
}

pub fn validate_password(password: &str) -> Result<(), ModelError> {
    if password.chars().count() < 8 {
        return Err(ModelError::Validation("password too short (>=8)".into()));
    }
    Ok(())
}

impl Validate for UtenteInput {
    fn validate(&self, today: NaiveDate) -> Result<(), ModelError> {
        validation::not_blank("nome", &self.nome)?;
        validation::max_len("nome", &self.nome, 128)?;
        validation::not_blank("cognome", &self.cognome)?;
        validation::max_len("cognome", &self.cognome, 128)?;
        validate_email(&self.email)?;
        validate_password(&self.password)?;
        if let Some(indirizzo) = &self.indirizzo {
            validation::max_len("indirizzo", indirizzo, 255)?;
        }
        validation::not_in_future("dataRegistrazione", self.data_registrazione, today)?;
        if let (Some(inizio), Some(fine)) = (self.data_inizio_abbonamento, self.data_fine_abbonamento) {
            validation::not_before("dataFineAbbonamento", fine, inizio)?;
        }
        Ok(())
    }
}
