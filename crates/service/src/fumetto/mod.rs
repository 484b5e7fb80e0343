pub mod repository;

pub use repository::SeaOrmFumettoRepository;
