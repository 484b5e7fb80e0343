//! Service layer providing record operations on top of models.
//! - Repository traits separate data access from request handling.
//! - `CrudService` validates payloads before they reach storage.
//! - `SeaOrmRepository` backs every resource stored in a single table.
//! - `WishlistItemService` exposes add/remove of comics on a stored wishlist.

pub mod errors;
pub mod password;
pub mod repository;
pub mod crud_service;
pub mod sea_orm_repository;
pub mod abbonamento;
pub mod utente;
pub mod fumetto;
pub mod wishlist;
pub mod copia_fumetto;
pub mod asta;
pub mod ordine;
pub mod dettagli_ordine;
pub mod runtime;
#[cfg(test)]
pub mod test_support;

pub use crud_service::CrudService;
pub use errors::ServiceError;
pub use repository::{Repository, WishlistRepository};
