use std::sync::Arc;

use tracing::{info, instrument};

use models::wishlist::Wishlist;

use crate::errors::ServiceError;
use crate::repository::WishlistRepository;

/// Item-level operations on a stored wishlist.
///
/// Each call changes a single join row inside one transaction.
/// `Ok(None)` means the wishlist does not exist.
pub struct WishlistItemService<R: WishlistRepository> {
    repo: Arc<R>,
}

impl<R: WishlistRepository> WishlistItemService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    #[instrument(skip(self))]
    pub async fn add_item(&self, wishlist_id: i32, fumetto_id: i32) -> Result<Option<Wishlist>, ServiceError> {
        let updated = self.repo.link_item(wishlist_id, fumetto_id).await?;
        if let Some(w) = &updated {
            info!(items = w.items().len(), "wishlist_item_added");
        }
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn remove_item(&self, wishlist_id: i32, fumetto_id: i32) -> Result<Option<Wishlist>, ServiceError> {
        let updated = self.repo.unlink_item(wishlist_id, fumetto_id).await?;
        if let Some(w) = &updated {
            info!(items = w.items().len(), "wishlist_item_removed");
        }
        Ok(updated)
    }
}
