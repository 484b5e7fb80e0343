pub mod resource;
pub mod wishlists;

use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::openapi;
use crate::state::AppState;

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse))
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: the record resources, the wishlist
/// item routes, health and the API docs.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let docs = SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi::openapi());

    Router::new()
        .route("/health", get(health))
        .merge(resource::resource_router(state.utenti, resource::UTENTI))
        .merge(resource::resource_router(state.fumetti, resource::FUMETTI))
        .merge(resource::resource_router(state.wishlists, resource::WISHLISTS))
        .merge(resource::resource_router(state.abbonamenti, resource::ABBONAMENTI))
        .merge(resource::resource_router(state.copie_fumetto, resource::COPIE_FUMETTO))
        .merge(resource::resource_router(state.aste, resource::ASTE))
        .merge(resource::resource_router(state.ordini, resource::ORDINI))
        .merge(resource::resource_router(state.dettagli_ordini, resource::DETTAGLI_ORDINI))
        .merge(wishlists::item_router(state.wishlist_items))
        .merge(docs)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx and I/O failures
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
