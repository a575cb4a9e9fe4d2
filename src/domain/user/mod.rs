//! User domain
//!
//! Entity, wire shapes, mapping functions and the repository trait for user
//! records.

mod dto;
mod entity;
pub mod mapper;
mod repository;
mod validation;

pub use dto::{UserRequest, UserResponse};
pub use entity::{User, UserId};
pub use repository::UserRepository;
pub use validation::validate_not_blank;

#[cfg(test)]
pub use repository::MockUserRepository;
