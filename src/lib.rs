//! In-N-Out-Books
//!
//! A small REST JSON API for managing a book catalog, with credential login
//! and security-question password reset. All state lives in process memory.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

use repository::Repository;
use services::{password::PasswordHashing, Services};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub repository: Repository,
    pub services: Arc<Services>,
}

impl AppState {
    /// Build fresh stores and services from configuration
    pub fn from_config(config: AppConfig) -> AppResult<Self> {
        let hasher = PasswordHashing::new(&config.security)?;
        let repository = if config.seed.enabled {
            let repository = Repository::seeded(&hasher)?;
            tracing::info!(
                "Seeded {} books and {} users",
                repository.books.len()?,
                repository.users.len()?
            );
            repository
        } else {
            Repository::default()
        };
        Ok(Self::with_repository(config, repository, hasher))
    }

    /// Build services over an existing repository
    pub fn with_repository(config: AppConfig, repository: Repository, hasher: PasswordHashing) -> Self {
        let services = Services::new(repository.clone(), config.catalog.clone(), hasher);
        Self {
            config: Arc::new(config),
            repository,
            services: Arc::new(services),
        }
    }
}
