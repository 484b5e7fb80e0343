use async_trait::async_trait;

use models::wishlist::{Wishlist, WishlistInput};

use crate::errors::ServiceError;

/// Data access for one resource type: identity generation, lookup, full
/// listing, replacement of writable fields and removal.
#[async_trait]
pub trait Repository: Send + Sync {
    /// Stored representation handed back to callers.
    type Record: Send + 'static;
    /// Writable fields accepted on create and update.
    type Input: Send + 'static;

    async fn insert(&self, input: Self::Input) -> Result<Self::Record, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Self::Record>, ServiceError>;
    /// All records, ascending by identity.
    async fn find_all(&self) -> Result<Vec<Self::Record>, ServiceError>;
    /// `Ok(None)` when no record has this identity.
    async fn update(&self, id: i32, input: Self::Input) -> Result<Option<Self::Record>, ServiceError>;
    /// `Ok(true)` when a record was removed.
    async fn delete_by_id(&self, id: i32) -> Result<bool, ServiceError>;
}

/// Wishlist persistence, including the join rows backing `Wishlist::items`.
///
/// Item changes touch a single join row inside one transaction and hand
/// back the reloaded wishlist; `Ok(None)` means the wishlist is unknown.
#[async_trait]
pub trait WishlistRepository: Repository<Record = Wishlist, Input = WishlistInput> {
    /// Append a comic unless already linked. Unknown comics are `NotFound`.
    async fn link_item(&self, wishlist_id: i32, fumetto_id: i32) -> Result<Option<Wishlist>, ServiceError>;
    /// Drop a comic; absent links are ignored.
    async fn unlink_item(&self, wishlist_id: i32, fumetto_id: i32) -> Result<Option<Wishlist>, ServiceError>;
}
