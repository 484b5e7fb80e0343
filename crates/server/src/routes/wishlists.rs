use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, post},
    Json, Router,
};
use models::wishlist::Wishlist;
use service::errors::ServiceError;
use service::wishlist::{SeaOrmWishlistRepository, WishlistItemService};
use tracing::info;

use crate::errors::JsonApiError;

pub const ADD_ITEM_PATH: &str = "/api/wishlists/:id/add-fumetto/:fumetto_id";
pub const REMOVE_ITEM_PATH: &str = "/api/wishlists/:id/remove-fumetto/:fumetto_id";

type ItemService = Arc<WishlistItemService<SeaOrmWishlistRepository>>;

pub fn item_router(items: ItemService) -> Router {
    Router::new()
        .route(ADD_ITEM_PATH, post(add_fumetto))
        .route(REMOVE_ITEM_PATH, delete(remove_fumetto))
        .with_state(items)
}

fn found(res: Result<Option<Wishlist>, ServiceError>) -> Result<Json<Wishlist>, JsonApiError> {
    match res {
        Ok(Some(w)) => Ok(Json(w)),
        Ok(None) | Err(ServiceError::NotFound(_)) => Err(JsonApiError::empty(StatusCode::NOT_FOUND)),
        Err(e) => Err(e.into()),
    }
}

pub async fn add_fumetto(
    State(items): State<ItemService>,
    Path((id, fumetto_id)): Path<(i32, i32)>,
) -> Result<Json<Wishlist>, JsonApiError> {
    let res = found(items.add_item(id, fumetto_id).await)?;
    info!(wishlist_id = id, fumetto_id, "add_fumetto");
    Ok(res)
}

pub async fn remove_fumetto(
    State(items): State<ItemService>,
    Path((id, fumetto_id)): Path<(i32, i32)>,
) -> Result<Json<Wishlist>, JsonApiError> {
    let res = found(items.remove_item(id, fumetto_id).await)?;
    info!(wishlist_id = id, fumetto_id, "remove_fumetto");
    Ok(res)
}
