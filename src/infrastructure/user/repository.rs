//! In-memory user repository implementation

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::user::{User, UserId, UserRepository};
use crate::domain::DomainError;

/// In-memory implementation of UserRepository
#[derive(Debug)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<BTreeMap<UserId, User>>>,
    /// Next id handed out by `save`
    sequence: AtomicI64,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(BTreeMap::new())),
            sequence: AtomicI64::new(1),
        }
    }

    /// Create a repository seeded with users.
    ///
    /// Users without an id get one from the sequence; the sequence continues
    /// after the highest id present.
    pub fn with_users(users: Vec<User>) -> Self {
        let highest = users.iter().filter_map(User::id).map(|id| id.value()).max();

        let repository = Self {
            users: Arc::new(RwLock::new(BTreeMap::new())),
            sequence: AtomicI64::new(highest.map_or(1, |h| h + 1)),
        };

        let mut map = BTreeMap::new();
        for user in users {
            let user = match user.id() {
                Some(_) => user,
                None => user.assign_id(repository.next_id()),
            };

            if let Some(id) = user.id() {
                map.insert(id, user);
            }
        }

        Self {
            users: Arc::new(RwLock::new(map)),
            ..repository
        }
    }

    fn next_id(&self) -> UserId {
        UserId::new(self.sequence.fetch_add(1, Ordering::SeqCst))
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, user: User) -> Result<User, DomainError> {
        let user = match user.id() {
            Some(_) => user,
            None => user.assign_id(self.next_id()),
        };

        let id = user
            .id()
            .ok_or_else(|| DomainError::storage("User has no id after assignment"))?;

        let mut users = self.users.write().await;
        users.insert(id, user.clone());

        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().cloned().collect())
    }

    async fn delete_by_id(&self, id: &UserId) -> Result<(), DomainError> {
        let mut users = self.users.write().await;
        users.remove(id);
        Ok(())
    }
}
