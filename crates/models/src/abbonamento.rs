use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::validation::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PianoAbbonamento {
    #[sea_orm(string_value = "MENSILE")]
    Mensile,
    #[sea_orm(string_value = "TRIMESTRALE")]
    Trimestrale,
    #[sea_orm(string_value = "SEMESTRALE")]
    Semestrale,
    #[sea_orm(string_value = "ANNUALE")]
    Annuale,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "abbonamento")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub abbonamento_id: i32,
    pub piano_abbonamento: PianoAbbonamento,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::utente::Entity")]
    Utente,
}

impl Related<super::utente::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Utente.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbbonamentoInput {
    pub piano_abbonamento: PianoAbbonamento,
}

impl Validate for AbbonamentoInput {
    fn validate(&self, _today: NaiveDate) -> Result<(), ModelError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plans_use_upper_case_names() {
        let parsed: AbbonamentoInput =
            serde_json::from_value(serde_json::json!({ "pianoAbbonamento": "TRIMESTRALE" })).unwrap();
        assert_eq!(parsed.piano_abbonamento, PianoAbbonamento::Trimestrale);
        assert!(serde_json::from_value::<AbbonamentoInput>(serde_json::json!({ "pianoAbbonamento": "BIENNALE" })).is_err());
    }
}
