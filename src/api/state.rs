//! Application state for shared services

use std::sync::Arc;

use crate::domain::{DomainError, UserId, UserRepository, UserRequest, UserResponse};
use crate::infrastructure::user::UserService;

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait>,
}

impl AppState {
    pub fn new(user_service: Arc<dyn UserServiceTrait>) -> Self {
        Self { user_service }
    }

    /// Build the state around a repository
    pub fn with_repository(repository: Arc<dyn UserRepository>) -> Self {
        Self::new(Arc::new(UserService::new(repository)))
    }
}

/// Trait for user service operations
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn create(&self, request: UserRequest) -> Result<UserResponse, DomainError>;
    async fn get_by_id(&self, id: UserId) -> Result<UserResponse, DomainError>;
    async fn get_all(&self) -> Result<Vec<UserResponse>, DomainError>;
    async fn update(&self, id: UserId, request: UserRequest) -> Result<UserResponse, DomainError>;
    async fn delete_by_id(&self, id: UserId) -> Result<(), DomainError>;
}

#[async_trait::async_trait]
impl<R> UserServiceTrait for UserService<R>
where
    R: UserRepository + ?Sized,
{
    async fn create(&self, request: UserRequest) -> Result<UserResponse, DomainError> {
        UserService::create(self, request).await
    }

    async fn get_by_id(&self, id: UserId) -> Result<UserResponse, DomainError> {
        UserService::get_by_id(self, id).await
    }

    async fn get_all(&self) -> Result<Vec<UserResponse>, DomainError> {
        UserService::get_all(self).await
    }

    async fn update(&self, id: UserId, request: UserRequest) -> Result<UserResponse, DomainError> {
        UserService::update(self, id, request).await
    }

    async fn delete_by_id(&self, id: UserId) -> Result<(), DomainError> {
        UserService::delete_by_id(self, id).await
    }
}
