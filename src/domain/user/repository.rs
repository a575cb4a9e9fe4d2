//! User repository trait

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::entity::{User, UserId};
use crate::domain::DomainError;

/// Repository trait for user storage
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a user, assigning an id when it has none
    async fn save(&self, user: User) -> Result<User, DomainError>;

    /// Get a user by its ID
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// List all users
    async fn find_all(&self) -> Result<Vec<User>, DomainError>;

    /// Delete a user by its ID
    async fn delete_by_id(&self, id: &UserId) -> Result<(), DomainError>;
}
