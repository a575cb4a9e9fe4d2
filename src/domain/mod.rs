//! Domain layer - entities, shapes and repository traits

pub mod error;
pub mod user;

pub use error::DomainError;
pub use user::{User, UserId, UserRepository, UserRequest, UserResponse};
