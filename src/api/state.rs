//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::{Database, DomainStore, ServiceStore, UserStore};
use crate::services::{Authenticator, AuthService, Catalog, CatalogService, Registry, RegistryService};

/// Application state containing all services.
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// Domain lifecycle service
    pub registry: Arc<dyn RegistryService>,
    /// Service catalog (read-only)
    pub catalog: Arc<dyn CatalogService>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Wire the default stores and services over a connected database.
    pub fn from_config(database: Arc<Database>, config: Config) -> Self {
        let connection = database.get_connection();
        let users = Arc::new(UserStore::new(connection.clone()));
        let domains = Arc::new(DomainStore::new(connection.clone()));
        let services = Arc::new(ServiceStore::new(connection));

        Self {
            auth_service: Arc::new(Authenticator::new(users.clone(), config)),
            registry: Arc::new(Registry::new(domains, services.clone(), users)),
            catalog: Arc::new(Catalog::new(services)),
            database,
        }
    }

    /// Create application state with manually injected services (tests).
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        registry: Arc<dyn RegistryService>,
        catalog: Arc<dyn CatalogService>,
        database: Arc<Database>,
    ) -> Self {
        Self {
            auth_service,
            registry,
            catalog,
            database,
        }
    }
}
