use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::validation::Validate;

/// One order line: how many units of a copy belong to an order.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "dettagli_ordine")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub dettagli_ordine_id: i32,
    pub quantita_fumetti: i32,
    pub copia_fumetto_id: i32,
    pub ordine_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::ordine::Entity",
        from = "Column::OrdineId",
        to = "super::ordine::Column::OrdineId",
        on_delete = "Cascade"
    )]
    Ordine,
    #[sea_orm(
        belongs_to = "super::copia_fumetto::Entity",
        from = "Column::CopiaFumettoId",
        to = "super::copia_fumetto::Column::CopiaFumettoId",
        on_delete = "Cascade"
    )]
    CopiaFumetto,
}

impl Related<super::ordine::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ordine.def()
    }
}

impl Related<super::copia_fumetto::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CopiaFumetto.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DettagliOrdineInput {
    pub quantita_fumetti: i32,
    pub copia_fumetto_id: i32,
    pub ordine_id: i32,
}

impl Validate for DettagliOrdineInput {
    fn validate(&self, _today: NaiveDate) -> Result<(), ModelError> {
        if self.quantita_fumetti < 1 {
            return Err(ModelError::Validation("quantitaFumetti must be at least 1".into()));
        }
        Ok(())
    }
}
