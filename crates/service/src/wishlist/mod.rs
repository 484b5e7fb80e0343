pub mod repository;
pub mod service;

pub use repository::SeaOrmWishlistRepository;
pub use service::WishlistItemService;
