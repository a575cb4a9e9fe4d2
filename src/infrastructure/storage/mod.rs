//! Storage infrastructure - backend selection and connection pooling

mod factory;
mod postgres;

pub use factory::{StorageFactory, StorageType};
pub use postgres::PostgresConfig;
