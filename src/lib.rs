//! User Registry API
//!
//! A small record-management service for user records with support for:
//! - Create, read, update and delete over HTTP
//! - Request validation before any storage access
//! - PostgreSQL or in-memory storage

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use api::state::AppState;
use infrastructure::storage::StorageFactory;
use tracing::info;

/// Create the application state with all services initialized
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let repository = StorageFactory::create_user_repository(&config.storage).await?;

    info!("User service initialized");
    Ok(AppState::with_repository(repository))
}
