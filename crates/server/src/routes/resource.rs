//! Handlers shared by every record resource.
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
    Json, Router,
};
use models::validation::Validate;
use serde::{de::DeserializeOwned, Serialize};
use service::{CrudService, Repository};
use tracing::{info, warn};

use crate::errors::JsonApiError;

/// Routes of one record resource. Utenti, fumetti, wishlists and ordini
/// spell the resource into each route (`create-utente`); the others use
/// plain `get-all`, `create`, `update` and `delete`.
#[derive(Debug, Clone, Copy)]
pub struct ResourcePaths {
    /// Singular name for logs and operation ids.
    pub name: &'static str,
    /// OpenAPI tag, the collection segment of the URL.
    pub tag: &'static str,
    /// Opens the delete messages.
    pub label: &'static str,
    pub create: &'static str,
    pub list: &'static str,
    pub find: &'static str,
    pub update: &'static str,
    pub delete: &'static str,
}

pub const UTENTI: ResourcePaths = ResourcePaths {
    name: "utente",
    tag: "utenti",
    label: "Utente",
    create: "/api/utenti/create-utente",
    list: "/api/utenti/get-utenti",
    find: "/api/utenti/find-utente-by-id/:id",
    update: "/api/utenti/update-utente/:id",
    delete: "/api/utenti/delete-utente/:id",
};

pub const FUMETTI: ResourcePaths = ResourcePaths {
    name: "fumetto",
    tag: "fumetti",
    label: "Fumetto",
    create: "/api/fumetti/create-fumetto",
    list: "/api/fumetti/get-fumetti",
    find: "/api/fumetti/find-fumetto-by-id/:id",
    update: "/api/fumetti/update-fumetto/:id",
    delete: "/api/fumetti/delete-fumetto/:id",
};

pub const WISHLISTS: ResourcePaths = ResourcePaths {
    name: "wishlist",
    tag: "wishlists",
    label: "Wishlist",
    create: "/api/wishlists/create-wishlist",
    list: "/api/wishlists/get-wishlists",
    find: "/api/wishlists/find-wishlist-by-id/:id",
    update: "/api/wishlists/update-wishlist/:id",
    delete: "/api/wishlists/delete-wishlist/:id",
};

pub const ABBONAMENTI: ResourcePaths = ResourcePaths {
    name: "abbonamento",
    tag: "abbonamenti",
    label: "Abbonamento",
    create: "/api/abbonamenti/create",
    list: "/api/abbonamenti/get-all",
    find: "/api/abbonamenti/find-by-id/:id",
    update: "/api/abbonamenti/update/:id",
    delete: "/api/abbonamenti/delete/:id",
};

pub const ASTE: ResourcePaths = ResourcePaths {
    name: "asta",
    tag: "aste",
    label: "Asta",
    create: "/api/aste/create",
    list: "/api/aste/get-all",
    find: "/api/aste/find-by-id/:id",
    update: "/api/aste/update/:id",
    delete: "/api/aste/delete/:id",
};

pub const COPIE_FUMETTO: ResourcePaths = ResourcePaths {
    name: "copia_fumetto",
    tag: "copieFumetto",
    label: "Copia fumetto",
    create: "/api/copieFumetto/create",
    list: "/api/copieFumetto/get-all",
    find: "/api/copieFumetto/find-by-id/:id",
    update: "/api/copieFumetto/update/:id",
    delete: "/api/copieFumetto/delete/:id",
};

pub const DETTAGLI_ORDINI: ResourcePaths = ResourcePaths {
    name: "dettagli_ordine",
    tag: "dettagliOrdini",
    label: "Dettagli ordine",
    create: "/api/dettagliOrdini/create",
    list: "/api/dettagliOrdini/get-all",
    find: "/api/dettagliOrdini/find-by-id/:id",
    update: "/api/dettagliOrdini/update/:id",
    delete: "/api/dettagliOrdini/delete/:id",
};

pub const ORDINI: ResourcePaths = ResourcePaths {
    name: "ordine",
    tag: "ordini",
    label: "Ordine",
    create: "/api/ordini/create-ordine",
    list: "/api/ordini/get-ordini",
    find: "/api/ordini/find-ordine-by-id/:id",
    update: "/api/ordini/update-ordine/:id",
    delete: "/api/ordini/delete-ordine/:id",
};

impl ResourcePaths {
    pub fn deleted_message(&self, id: i32) -> String { format!("{} con ID {} eliminato con successo", self.label, id) }
    pub fn missing_message(&self, id: i32) -> String { format!("{} con ID {} non trovato", self.label, id) }
}

pub struct ResourceState<R: Repository> {
    pub service: Arc<CrudService<R>>,
    pub paths: ResourcePaths,
}

impl<R: Repository> Clone for ResourceState<R> {
    fn clone(&self) -> Self { Self { service: Arc::clone(&self.service), paths: self.paths } }
}

/// Mount the five record routes of one resource.
pub fn resource_router<R>(service: Arc<CrudService<R>>, paths: ResourcePaths) -> Router
where
    R: Repository + 'static,
    R::Record: Serialize,
    R::Input: DeserializeOwned + Validate,
{
    Router::new()
        .route(paths.create, post(create::<R>))
        .route(paths.list, get(list_all::<R>))
        .route(paths.find, get(find_by_id::<R>))
        .route(paths.delete, delete(delete_by_id::<R>))
        .route(paths.update, put(update_by_id::<R>))
        .with_state(ResourceState { service, paths })
}

pub async fn create<R>(
    State(st): State<ResourceState<R>>,
    payload: Result<Json<R::Input>, JsonRejection>,
) -> Result<(StatusCode, Json<R::Record>), JsonApiError>
where
    R: Repository,
    R::Record: Serialize,
    R::Input: Validate,
{
    let Json(input) = payload.map_err(|e| {
        warn!(resource = st.paths.name, err = %e, "create_rejected_body");
        JsonApiError::empty(StatusCode::BAD_REQUEST)
    })?;
    match st.service.create(input).await {
        Ok(record) => Ok((StatusCode::CREATED, Json(record))),
        Err(e) if e.is_validation() => {
            warn!(resource = st.paths.name, err = %e, "create_rejected");
            Err(JsonApiError::empty(StatusCode::BAD_REQUEST))
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn list_all<R>(State(st): State<ResourceState<R>>) -> Result<Json<Vec<R::Record>>, JsonApiError>
where
    R: Repository,
    R::Record: Serialize,
    R::Input: Validate,
{
    let all = st.service.list_all().await?;
    info!(resource = st.paths.name, count = all.len(), "list");
    Ok(Json(all))
}

pub async fn find_by_id<R>(
    State(st): State<ResourceState<R>>,
    Path(id): Path<i32>,
) -> Result<Json<R::Record>, JsonApiError>
where
    R: Repository,
    R::Record: Serialize,
    R::Input: Validate,
{
    st.service
        .find_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| JsonApiError::empty(StatusCode::NOT_FOUND))
}

pub async fn delete_by_id<R>(
    State(st): State<ResourceState<R>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, JsonApiError>
where
    R: Repository,
    R::Input: Validate,
{
    if st.service.delete_by_id(id).await? {
        Ok((StatusCode::OK, st.paths.deleted_message(id)))
    } else {
        Ok((StatusCode::NOT_FOUND, st.paths.missing_message(id)))
    }
}

pub async fn update_by_id<R>(
    State(st): State<ResourceState<R>>,
    Path(id): Path<i32>,
    payload: Result<Json<R::Input>, JsonRejection>,
) -> Result<Json<R::Record>, JsonApiError>
where
    R: Repository,
    R::Record: Serialize,
    R::Input: Validate,
{
    let Json(input) = payload
        .map_err(|e| JsonApiError::new(StatusCode::BAD_REQUEST, "Invalid Body", Some(e.body_text())))?;
    st.service
        .update(id, input)
        .await?
        .map(Json)
        .ok_or_else(|| JsonApiError::empty(StatusCode::NOT_FOUND))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn route_names_follow_resource() {
        assert_eq!(UTENTI.create, "/api/utenti/create-utente");
        assert_eq!(FUMETTI.list, "/api/fumetti/get-fumetti");
        assert_eq!(WISHLISTS.find, "/api/wishlists/find-wishlist-by-id/:id");
        assert_eq!(ABBONAMENTI.list, "/api/abbonamenti/get-all");
        assert_eq!(COPIE_FUMETTO.update, "/api/copieFumetto/update/:id");
        assert_eq!(DETTAGLI_ORDINI.delete, "/api/dettagliOrdini/delete/:id");
        assert_eq!(ORDINI.list, "/api/ordini/get-ordini");
        assert_eq!(ORDINI.create, "/api/ordini/create-ordine");
    }

    #[test]
    fn every_route_is_unique_and_under_its_tag() {
        let mut seen = HashSet::new();
        for paths in [UTENTI, FUMETTI, WISHLISTS, ABBONAMENTI, COPIE_FUMETTO, ASTE, ORDINI, DETTAGLI_ORDINI] {
            let prefix = format!("/api/{}/", paths.tag);
            for route in [paths.create, paths.list, paths.find, paths.update, paths.delete] {
                assert!(route.starts_with(&prefix), "{route} outside {prefix}");
                assert!(seen.insert(route), "duplicate route {route}");
            }
            for route in [paths.find, paths.update, paths.delete] {
                assert!(route.ends_with("/:id"), "{route} lacks the id segment");
            }
        }
    }

    #[test]
    fn delete_messages_carry_the_id() {
        assert_eq!(WISHLISTS.deleted_message(7), "Wishlist con ID 7 eliminato con successo");
        assert_eq!(UTENTI.missing_message(3), "Utente con ID 3 non trovato");
        assert_eq!(COPIE_FUMETTO.missing_message(9), "Copia fumetto con ID 9 non trovato");
    }
}
