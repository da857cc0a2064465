//! Service catalog repository.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use super::entities::service::{self, ActiveModel, Entity as ServiceEntity};
use crate::domain::Service;
use crate::errors::{AppError, AppResult};

/// Service repository trait for dependency injection.
#[async_trait]
pub trait ServiceRepository: Send + Sync {
    /// Find service by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Service>>;

    /// List all services
    async fn list(&self) -> AppResult<Vec<Service>>;

    /// Create a new service (used by the seed command only)
    async fn create(&self, service_name: String, service_price: f64) -> AppResult<Service>;
}

/// Concrete implementation of ServiceRepository
pub struct ServiceStore {
    db: DatabaseConnection,
}

impl ServiceStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ServiceRepository for ServiceStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Service>> {
        let result = ServiceEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Service::from))
    }

    async fn list(&self) -> AppResult<Vec<Service>> {
        let models = ServiceEntity::find()
            .order_by_asc(service::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Service::from).collect())
    }

    async fn create(&self, service_name: String, service_price: f64) -> AppResult<Service> {
        let active_model = ActiveModel {
            service_name: Set(service_name),
            service_price: Set(service_price),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Service::from(model))
    }
}
