//! Wishlist table plus the `Wishlist` aggregate handed out by the service layer.
//!
//! The table row only carries the scalar columns; comics live in
//! `wishlist_fumetto` and are attached to the aggregate by the repository.
use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::fumetto;
use crate::validation::{self, Validate};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "wishlist")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub wishlist_id: i32,
    pub data_creazione: NaiveDate,
    #[sea_orm(unique)]
    pub utente_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::utente::Entity",
        from = "Column::UtenteId",
        to = "super::utente::Column::UtenteId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Utente,
    #[sea_orm(has_many = "super::wishlist_fumetto::Entity")]
    WishlistFumetto,
}

impl Related<super::utente::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Utente.def()
    }
}

impl Related<super::wishlist_fumetto::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WishlistFumetto.def()
    }
}

impl Related<super::fumetto::Entity> for Entity {
    fn to() -> RelationDef {
        super::wishlist_fumetto::Relation::Fumetto.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::wishlist_fumetto::Relation::Wishlist.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// A wishlist with its owner reference and the comics it holds.
///
/// Equality follows identity: two wishlists are equal only when both carry
/// the same assigned id (or are the very same value). The hash never looks at
/// the id, so a wishlist can sit in a `HashSet` before and after it is saved.
#[derive(Debug, Clone, Serialize)]
pub struct Wishlist {
    #[serde(rename = "wishlistId")]
    id: Option<i32>,
    #[serde(rename = "dataCreazione")]
    creation_date: NaiveDate,
    #[serde(rename = "utenteId")]
    owner: Option<i32>,
    #[serde(rename = "fumetti")]
    items: Vec<fumetto::Model>,
}

impl Wishlist {
    pub fn new(creation_date: NaiveDate) -> Self {
        Self { id: None, creation_date, owner: None, items: Vec::new() }
    }

    /// Rebuild the aggregate from a stored row and its ordered comics.
    pub fn from_row(row: Model, items: Vec<fumetto::Model>) -> Self {
        let mut w = Self {
            id: Some(row.wishlist_id),
            creation_date: row.data_creazione,
            owner: row.utente_id,
            items: Vec::with_capacity(items.len()),
        };
        w.set_items(items);
        w
    }

    pub fn id(&self) -> Option<i32> {
        self.id
    }

    /// Assign the generated identity. Once set it cannot change.
    pub fn assign_id(&mut self, id: i32) -> Result<(), ModelError> {
        match self.id {
            Some(current) if current != id => Err(ModelError::Validation(format!(
                "wishlist identity already assigned ({current})"
            ))),
            _ => {
                self.id = Some(id);
                Ok(())
            }
        }
    }

    pub fn creation_date(&self) -> NaiveDate {
        self.creation_date
    }

    pub fn set_creation_date(&mut self, creation_date: NaiveDate) {
        self.creation_date = creation_date;
    }

    pub fn owner(&self) -> Option<i32> {
        self.owner
    }

    pub fn set_owner(&mut self, owner: Option<i32>) {
        self.owner = owner;
    }

    pub fn items(&self) -> &[fumetto::Model] {
        &self.items
    }

    /// Replace the items, keeping the first occurrence of each comic.
    pub fn set_items<I: IntoIterator<Item = fumetto::Model>>(&mut self, items: I) {
        self.items.clear();
        for item in items {
            self.add_item(item);
        }
    }

    pub fn contains(&self, fumetto_id: i32) -> bool {
        self.items.iter().any(|f| f.fumetto_id == fumetto_id)
    }

    /// Append a comic unless it is already present.
    pub fn add_item(&mut self, item: fumetto::Model) {
        if !self.contains(item.fumetto_id) {
            self.items.push(item);
        }
    }

    /// Drop a comic; absent comics are ignored.
    pub fn remove_item(&mut self, item: &fumetto::Model) {
        self.items.retain(|f| f.fumetto_id != item.fumetto_id);
    }

    pub fn item_ids(&self) -> Vec<i32> {
        self.items.iter().map(|f| f.fumetto_id).collect()
    }
}

impl PartialEq for Wishlist {
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        matches!((self.id, other.id), (Some(a), Some(b)) if a == b)
    }
}

impl Eq for Wishlist {}

impl Hash for Wishlist {
    fn hash<H: Hasher>(&self, state: &mut H) {
        "wishlist".hash(state);
    }
}

impl fmt::Display for Wishlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Wishlist{{id=")?;
        match self.id {
            Some(id) => write!(f, "{id}")?,
            None => write!(f, "null")?,
        }
        write!(f, ", dataCreazione={}", self.creation_date)
    }
}

/// Reference to a comic inside a wishlist payload. Extra fields (a full
/// comic object) are accepted and ignored.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FumettoRef {
    pub fumetto_id: i32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistInput {
    pub data_creazione: NaiveDate,
    #[serde(default)]
    pub utente_id: Option<i32>,
    /// `None` keeps the current items on update; `Some` replaces them.
    #[serde(default)]
    pub fumetti: Option<Vec<FumettoRef>>,
}

impl WishlistInput {
    /// Requested comic ids, first occurrence wins.
    pub fn fumetto_ids(&self) -> Option<Vec<i32>> {
        self.fumetti.as_ref().map(|refs| {
            let mut ids: Vec<i32> = Vec::with_capacity(refs.len());
            for r in refs {
                if !ids.contains(&r.fumetto_id) {
                    ids.push(r.fumetto_id);
                }
            }
            ids
        })
    }
}

impl Validate for WishlistInput {
    fn validate(&self, today: NaiveDate) -> Result<(), ModelError> {
        validation::not_in_future("dataCreazione", self.data_creazione, today)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::fumetto::CategoriaFumetto;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn comic(id: i32, titolo: &str) -> fumetto::Model {
        fumetto::Model {
            fumetto_id: id,
            titolo: titolo.into(),
            autore: "Autore".into(),
            editore: "Editore".into(),
            descrizione: None,
            data_pubblicazione: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
            disponibile_per_asta: false,
            categoria_fumetto: CategoriaFumetto::Fantasy,
        }
    }

    #[test]
    fn add_item_is_idempotent() {
        let mut w = Wishlist::new(today());
        w.add_item(comic(1, "Tex"));
        w.add_item(comic(1, "Tex"));
        assert_eq!(w.item_ids(), vec![1]);
    }

    #[test]
    fn remove_absent_item_is_noop() {
        let mut w = Wishlist::new(today());
        w.add_item(comic(1, "Tex"));
        w.remove_item(&comic(2, "Zagor"));
        assert_eq!(w.item_ids(), vec![1]);
        w.remove_item(&comic(1, "Tex"));
        assert!(w.items().is_empty());
    }

    #[test]
    fn items_keep_insertion_order() {
        let mut w = Wishlist::new(today());
        w.set_items(vec![comic(3, "C"), comic(1, "A"), comic(3, "C again"), comic(2, "B")]);
        assert_eq!(w.item_ids(), vec![3, 1, 2]);
        assert_eq!(w.items()[0].titolo, "C");
    }

    #[test]
    fn equality_requires_assigned_identity() {
        let a = Wishlist::new(today());
        let b = a.clone();
        assert_eq!(a, a);
        assert_ne!(a, b);

        let mut c = Wishlist::new(today());
        let mut d = Wishlist::new(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
        c.assign_id(5).unwrap();
        d.assign_id(5).unwrap();
        assert_eq!(c, d);
        d = Wishlist::new(today());
        d.assign_id(6).unwrap();
        assert_ne!(c, d);
    }

    #[test]
    fn hash_is_stable_across_id_assignment() {
        use std::collections::hash_map::DefaultHasher;
        let hash = |w: &Wishlist| {
            let mut h = DefaultHasher::new();
            w.hash(&mut h);
            h.finish()
        };
        let mut w = Wishlist::new(today());
        let before = hash(&w);
        w.assign_id(42).unwrap();
        assert_eq!(before, hash(&w));

        let mut set = HashSet::new();
        set.insert(w.clone());
        assert!(set.contains(&w));
    }

    #[test]
    fn identity_cannot_be_reassigned() {
        let mut w = Wishlist::new(today());
        w.assign_id(1).unwrap();
        assert!(w.assign_id(1).is_ok());
        assert!(w.assign_id(2).is_err());
        assert_eq!(w.id(), Some(1));
    }

    #[test]
    fn display_shows_identity_and_date() {
        let mut w = Wishlist::new(today());
        assert_eq!(w.to_string(), "Wishlist{id=null, dataCreazione=2024-06-01}");
        w.assign_id(3).unwrap();
        assert_eq!(w.to_string(), "Wishlist{id=3, dataCreazione=2024-06-01}");
    }

    #[test]
    fn serializes_with_client_field_names() {
        let mut w = Wishlist::from_row(
            Model { wishlist_id: 9, data_creazione: today(), utente_id: Some(4) },
            vec![comic(1, "Tex")],
        );
        w.set_owner(Some(4));
        let json = serde_json::to_value(&w).unwrap();
        assert_eq!(json["wishlistId"], 9);
        assert_eq!(json["dataCreazione"], "2024-06-01");
        assert_eq!(json["utenteId"], 4);
        assert_eq!(json["fumetti"][0]["fumettoId"], 1);
    }

    #[test]
    fn future_creation_date_is_rejected() {
        let input = WishlistInput {
            data_creazione: NaiveDate::from_ymd_opt(2024, 6, 2).unwrap(),
            utente_id: None,
            fumetti: None,
        };
        assert!(matches!(input.validate(today()), Err(ModelError::Validation(_))));
    }

    #[test]
    fn input_accepts_full_comic_objects_and_dedupes() {
        let input: WishlistInput = serde_json::from_value(serde_json::json!({
            "dataCreazione": "2024-05-01",
            "utenteId": 1,
            "fumetti": [
                {"fumettoId": 2, "titolo": "Tex"},
                {"fumettoId": 1},
                {"fumettoId": 2}
            ]
        }))
        .unwrap();
        assert_eq!(input.fumetto_ids(), Some(vec![2, 1]));
    }

    #[test]
    fn missing_fumetti_means_keep_current() {
        let input: WishlistInput =
            serde_json::from_value(serde_json::json!({"dataCreazione": "2024-05-01"})).unwrap();
        assert_eq!(input.fumetto_ids(), None);
        assert_eq!(input.utente_id, None);
    }
}
