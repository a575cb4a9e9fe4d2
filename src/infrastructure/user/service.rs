//! User service orchestrating the CRUD use cases

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::user::mapper::{entities_to_responses, entity_to_response, request_to_entity};
use crate::domain::user::{User, UserId, UserRepository, UserRequest, UserResponse};
use crate::domain::DomainError;

/// User service for record management
pub struct UserService<R: UserRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: UserRepository + ?Sized> UserService<R> {
    /// Create a new user service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Create a new user
    pub async fn create(&self, request: UserRequest) -> Result<UserResponse, DomainError> {
        debug!("Creating user");

        let user = request_to_entity(request);
        let saved = self.repository.save(user).await?;

        info!(id = ?saved.id(), "User created");
        Ok(entity_to_response(&saved))
    }

    /// Get a user by ID
    pub async fn get_by_id(&self, id: UserId) -> Result<UserResponse, DomainError> {
        debug!(%id, "Getting user");

        let user = self.find_existing(id).await?;
        Ok(entity_to_response(&user))
    }

    /// List all users
    pub async fn get_all(&self) -> Result<Vec<UserResponse>, DomainError> {
        debug!("Listing users");

        let users = self.repository.find_all().await?;

        debug!(count = users.len(), "Users listed");
        Ok(entities_to_responses(&users))
    }

    /// Overwrite name, surname and age of an existing user
    pub async fn update(
        &self,
        id: UserId,
        request: UserRequest,
    ) -> Result<UserResponse, DomainError> {
        debug!(%id, "Updating user");

        let mut user = self.find_existing(id).await?;
        user.apply_changes(request.name, request.surname, request.age);

        let saved = self.repository.save(user).await?;

        info!(%id, "User updated");
        Ok(entity_to_response(&saved))
    }

    /// Delete a user; a missing id is reported as not found
    pub async fn delete_by_id(&self, id: UserId) -> Result<(), DomainError> {
        debug!(%id, "Deleting user");

        self.find_existing(id).await?;
        self.repository.delete_by_id(&id).await?;

        info!(%id, "User deleted");
        Ok(())
    }

    async fn find_existing(&self, id: UserId) -> Result<User, DomainError> {
        self.repository.find_by_id(&id).await?.ok_or_else(|| {
            warn!(%id, "User not found");
            DomainError::not_found(format!("User not found with id: {}", id))
        })
    }
}
