use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::validation::{self, Validate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatoCopiaFumetto {
    #[sea_orm(string_value = "NUOVO")]
    Nuovo,
    #[sea_orm(string_value = "USATO")]
    Usato,
}

/// A physical, sellable copy of a catalogue comic.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "copia_fumetto")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub copia_fumetto_id: i32,
    pub stato_copia_fumetto: StatoCopiaFumetto,
    pub prezzo: f64,
    pub disponibile: bool,
    pub fumetto_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::fumetto::Entity",
        from = "Column::FumettoId",
        to = "super::fumetto::Column::FumettoId",
        on_delete = "Cascade"
    )]
    Fumetto,
    #[sea_orm(has_many = "super::asta::Entity")]
    Asta,
    #[sea_orm(has_many = "super::dettagli_ordine::Entity")]
    DettagliOrdine,
}

impl Related<super::fumetto::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Fumetto.def()
    }
}

impl Related<super::asta::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Asta.def()
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
pub struct CopiaFumettoInput {
    pub stato_copia_fumetto: StatoCopiaFumetto,
    pub prezzo: f64,
    #[serde(default = "available")]
    pub disponibile: bool,
    pub fumetto_id: i32,
}

fn available() -> bool {
    true
}

impl Validate for CopiaFumettoInput {
    fn validate(&self, _today: NaiveDate) -> Result<(), ModelError> {
        validation::non_negative("prezzo", self.prezzo)
    }
}
