//! Join rows of the wishlist <-> fumetto many-to-many.
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "wishlist_fumetto")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub wishlist_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub fumetto_id: i32,
    /// Zero-based position of the comic inside the wishlist.
    pub posizione: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::wishlist::Entity",
        from = "Column::WishlistId",
        to = "super::wishlist::Column::WishlistId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Wishlist,
    #[sea_orm(
        belongs_to = "super::fumetto::Entity",
        from = "Column::FumettoId",
        to = "super::fumetto::Column::FumettoId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Fumetto,
}

impl Related<super::wishlist::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Wishlist.def()
    }
}

impl Related<super::fumetto::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Fumetto.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
