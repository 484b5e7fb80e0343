use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::validation::{self, Validate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CategoriaFumetto {
    #[sea_orm(string_value = "FANTASY")]
    Fantasy,
    #[sea_orm(string_value = "FANTASCIENZA")]
    Fantascienza,
    #[sea_orm(string_value = "HORROR")]
    Horror,
    #[sea_orm(string_value = "SUPEREROI")]
    Supereroi,
    #[sea_orm(string_value = "SPORTIVO")]
    Sportivo,
    #[sea_orm(string_value = "SCOLASTICO")]
    Scolastico,
    #[sea_orm(string_value = "ROMANTICO")]
    Romantico,
    #[sea_orm(string_value = "AZIONE")]
    Azione,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "fumetto")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub fumetto_id: i32,
    pub titolo: String,
    pub autore: String,
    pub editore: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub descrizione: Option<String>,
    pub data_pubblicazione: NaiveDate,
    pub disponibile_per_asta: bool,
    pub categoria_fumetto: CategoriaFumetto,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::wishlist_fumetto::Entity")]
    WishlistFumetto,
}

impl Related<super::wishlist_fumetto::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WishlistFumetto.def()
    }
}

impl Related<super::wishlist::Entity> for Entity {
    fn to() -> RelationDef {
        super::wishlist_fumetto::Relation::Wishlist.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::wishlist_fumetto::Relation::Fumetto.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FumettoInput {
    pub titolo: String,
    pub autore: String,
    pub editore: String,
    #[serde(default)]
    pub descrizione: Option<String>,
    pub data_pubblicazione: NaiveDate,
    #[serde(default)]
    pub disponibile_per_asta: bool,
    pub categoria_fumetto: CategoriaFumetto,
}

impl Validate for FumettoInput {
    fn validate(&self, _today: NaiveDate) -> Result<(), ModelError> {
        for (field, value) in [("titolo", &self.titolo), ("autore", &self.autore), ("editore", &self.editore)] {
            validation::not_blank(field, value)?;
            validation::max_len(field, value, 255)?;
        }
        Ok(())
    }
}
