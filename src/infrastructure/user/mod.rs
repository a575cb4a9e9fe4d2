//! User infrastructure module
//!
//! Repository implementations (PostgreSQL and in-memory) and the user
//! service that drives them.

mod postgres_repository;
mod repository;
mod service;

pub use postgres_repository::PostgresUserRepository;
pub use repository::InMemoryUserRepository;
pub use service::UserService;
