pub mod decimal;
pub mod factory;
pub mod repository;

pub use factory::SqliteProviderFactory;
pub use repository::SqliteStateRepository;
