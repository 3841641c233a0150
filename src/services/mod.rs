//! Business logic services

pub mod auth;
pub mod catalog;
pub mod identifier;
pub mod password;
pub mod reset;

use crate::{config::CatalogConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub auth: auth::AuthService,
    pub reset: reset::ResetService,
}

impl Services {
    /// Create all services over the given repository
    pub fn new(
        repository: Repository,
        catalog_config: CatalogConfig,
        hasher: password::PasswordHashing,
    ) -> Self {
        Self {
            catalog: catalog::CatalogService::new(repository.clone(), catalog_config),
            auth: auth::AuthService::new(repository.clone(), hasher.clone()),
            reset: reset::ResetService::new(repository, hasher),
        }
    }
}
