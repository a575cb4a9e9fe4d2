//! Storage backend selection

use std::sync::Arc;

use tracing::info;

use super::postgres::PostgresConfig;
use crate::config::StorageSettings;
use crate::domain::user::UserRepository;
use crate::domain::DomainError;
use crate::infrastructure::user::{InMemoryUserRepository, PostgresUserRepository};

/// Supported storage backends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageType {
    /// In-memory storage (for testing/development)
    InMemory,
    /// PostgreSQL storage
    Postgres,
}

impl StorageType {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "memory" | "inmemory" | "in-memory" | "in_memory" => Some(Self::InMemory),
            "postgres" | "postgresql" | "pg" => Some(Self::Postgres),
            _ => None,
        }
    }
}

/// Factory for user repositories
#[derive(Debug)]
pub struct StorageFactory;

impl StorageFactory {
    /// Build the user repository selected by the settings.
    ///
    /// For PostgreSQL the `users` table is created when missing.
    pub async fn create_user_repository(
        settings: &StorageSettings,
    ) -> Result<Arc<dyn UserRepository>, DomainError> {
        let backend = StorageType::from_str(&settings.backend).ok_or_else(|| {
            DomainError::configuration(format!("Unknown storage backend '{}'", settings.backend))
        })?;

        info!(backend = ?backend, "Initializing user storage");

        match backend {
            StorageType::InMemory => Ok(Arc::new(InMemoryUserRepository::new())),
            StorageType::Postgres => {
                let config = Self::postgres_config(settings)?;
                let pool = config.connect().await?;
                info!("PostgreSQL connection established");

                let repository = PostgresUserRepository::new(pool);
                repository.ensure_schema().await?;

                Ok(Arc::new(repository))
            }
        }
    }

    fn postgres_config(settings: &StorageSettings) -> Result<PostgresConfig, DomainError> {
        let url = settings.database_url.clone().ok_or_else(|| {
            DomainError::configuration(
                "PostgreSQL backend requires storage.database_url or DATABASE_URL",
            )
        })?;

        Ok(PostgresConfig::new(url)
            .with_max_connections(settings.max_connections)
            .with_min_connections(settings.min_connections)
            .with_connect_timeout(settings.connect_timeout_secs)
            .with_idle_timeout(settings.idle_timeout_secs))
    }
}
