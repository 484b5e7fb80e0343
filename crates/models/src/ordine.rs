use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::validation::{self, Validate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatoOrdine {
    #[sea_orm(string_value = "CONSEGNATO")]
    Consegnato,
    #[sea_orm(string_value = "ANNULLATO")]
    Annullato,
    #[sea_orm(string_value = "IN_CONSEGNA")]
    InConsegna,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ordine")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub ordine_id: i32,
    pub prezzo_finale: f64,
    pub data_ordine: NaiveDate,
    pub stato_ordine: StatoOrdine,
    pub utente_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::utente::Entity",
        from = "Column::UtenteId",
        to = "super::utente::Column::UtenteId",
        on_delete = "Cascade"
    )]
    Utente,
    #[sea_orm(has_many = "super::dettagli_ordine::Entity")]
    DettagliOrdine,
}

impl Related<super::utente::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Utente.def()
    }
}

impl Related<super::dettagli_ordine::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DettagliOrdine.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrdineInput {
    pub prezzo_finale: f64,
    pub data_ordine: NaiveDate,
    pub stato_ordine: StatoOrdine,
    pub utente_id: i32,
}

impl Validate for OrdineInput {
    fn validate(&self, today: NaiveDate) -> Result<(), ModelError> {
        validation::non_negative("prezzoFinale", self.prezzo_finale)?;
        validation::not_in_future("dataOrdine", self.data_ordine, today)
    }
}
