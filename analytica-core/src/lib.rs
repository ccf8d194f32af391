pub mod calculations;
pub mod db;
pub mod models;

pub use db::{
    ProviderConfig, ProviderError, ProviderFactory, ProviderRegistry, StateProvider,
    StateRepository,
};
pub use models::*;
