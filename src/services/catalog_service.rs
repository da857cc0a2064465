//! Catalog service - read-only access to the value-added services.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::Service;
use crate::errors::{AppError, AppResult};
use crate::infra::ServiceRepository;

/// Catalog service trait for dependency injection.
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// List all services
    async fn list_services(&self) -> AppResult<Vec<Service>>;

    /// Get one service by ID
    async fn get_service(&self, id: i32) -> AppResult<Service>;
}

/// Concrete implementation of CatalogService
pub struct Catalog {
    services: Arc<dyn ServiceRepository>,
}

impl Catalog {
    /// Create new catalog service instance
    pub fn new(services: Arc<dyn ServiceRepository>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl CatalogService for Catalog {
    async fn list_services(&self) -> AppResult<Vec<Service>> {
        self.services.list().await
    }

    async fn get_service(&self, id: i32) -> AppResult<Service> {
        self.services
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Service with id {} not found", id)))
    }
}
