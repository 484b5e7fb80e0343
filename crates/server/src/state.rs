use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::abbonamento::SeaOrmAbbonamentoRepository;
use service::asta::SeaOrmAstaRepository;
use service::copia_fumetto::SeaOrmCopiaFumettoRepository;
use service::dettagli_ordine::SeaOrmDettagliOrdineRepository;
use service::fumetto::SeaOrmFumettoRepository;
use service::ordine::SeaOrmOrdineRepository;
use service::utente::SeaOrmUtenteRepository;
use service::wishlist::{SeaOrmWishlistRepository, WishlistItemService};
use service::CrudService;

/// Services shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    pub utenti: Arc<CrudService<SeaOrmUtenteRepository>>,
    pub fumetti: Arc<CrudService<SeaOrmFumettoRepository>>,
    pub wishlists: Arc<CrudService<SeaOrmWishlistRepository>>,
    pub wishlist_items: Arc<WishlistItemService<SeaOrmWishlistRepository>>,
    pub abbonamenti: Arc<CrudService<SeaOrmAbbonamentoRepository>>,
    pub copie_fumetto: Arc<CrudService<SeaOrmCopiaFumettoRepository>>,
    pub aste: Arc<CrudService<SeaOrmAstaRepository>>,
    pub ordini: Arc<CrudService<SeaOrmOrdineRepository>>,
    pub dettagli_ordini: Arc<CrudService<SeaOrmDettagliOrdineRepository>>,
}

fn crud<R>(repo: R, entity: &'static str) -> Arc<CrudService<R>>
where
    R: service::Repository,
    R::Input: models::validation::Validate,
{
    Arc::new(CrudService::new(Arc::new(repo), entity))
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        let wishlist_repo = Arc::new(SeaOrmWishlistRepository::new(db.clone()));
        Self {
            utenti: crud(SeaOrmUtenteRepository::new(db.clone()), "utente"),
            fumetti: crud(SeaOrmFumettoRepository::new(db.clone()), "fumetto"),
            wishlists: Arc::new(CrudService::new(wishlist_repo.clone(), "wishlist")),
            wishlist_items: Arc::new(WishlistItemService::new(wishlist_repo)),
            abbonamenti: crud(SeaOrmAbbonamentoRepository::new(db.clone()), "abbonamento"),
            copie_fumetto: crud(SeaOrmCopiaFumettoRepository::new(db.clone()), "copia_fumetto"),
            aste: crud(SeaOrmAstaRepository::new(db.clone()), "asta"),
            ordini: crud(SeaOrmOrdineRepository::new(db.clone()), "ordine"),
            dettagli_ordini: crud(SeaOrmDettagliOrdineRepository::new(db), "dettagli_ordine"),
        }
    }
}
