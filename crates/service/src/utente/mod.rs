pub mod repository;

pub use repository::SeaOrmUtenteRepository;
