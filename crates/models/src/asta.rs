//! Auctions over a single [`copia_fumetto`](super::copia_fumetto) record.
//!
//! The best bidder is optional: a fresh auction has none, and removing the
//! bidding user clears the reference instead of dropping the auction.

use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::validation::{self, Validate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatoAsta {
    #[sea_orm(string_value = "IN_CORSO")]
    InCorso,
    #[sea_orm(string_value = "CONCLUSA")]
    Conclusa,
    #[sea_orm(string_value = "ANNULLATA")]
    Annullata,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "asta")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub asta_id: i32,
    pub data_inizio: NaiveDate,
    pub data_fine: NaiveDate,
    pub offerta_corrente: f64,
    pub stato_asta: StatoAsta,
    pub copia_fumetto_id: i32,
    pub utente_migliore_offerta_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::copia_fumetto::Entity",
        from = "Column::CopiaFumettoId",
        to = "super::copia_fumetto::Column::CopiaFumettoId",
        on_delete = "Cascade"
    )]
    CopiaFumetto,
    #[sea_orm(
        belongs_to = "super::utente::Entity",
        from = "Column::UtenteMiglioreOffertaId",
        to = "super::utente::Column::UtenteId",
        on_delete = "SetNull"
    )]
    UtenteMiglioreOfferta,
}

impl Related<super::copia_fumetto::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CopiaFumetto.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AstaInput {
    pub data_inizio: NaiveDate,
    pub data_fine: NaiveDate,
    pub offerta_corrente: f64,
    pub stato_asta: StatoAsta,
    pub copia_fumetto_id: i32,
    #[serde(default)]
    pub utente_migliore_offerta_id: Option<i32>,
}

impl Validate for AstaInput {
    fn validate(&self, _today: NaiveDate) -> Result<(), ModelError> {
        validation::not_before("dataFine", self.data_fine, self.data_inizio)?;
        validation::non_negative("offertaCorrente", self.offerta_corrente)
    }
}
