//! Domain repository, including the attachment records that belong to
//! the domain aggregate.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    SqlErr,
};

use super::entities::domain::{self, Entity as DomainEntity};
use super::entities::domain_service::{self, Entity as AttachmentEntity};
use crate::domain::{Attachment, Domain, NewAttachment, NewDomain};
use crate::errors::{AppError, AppResult};

/// Domain repository trait for dependency injection.
#[async_trait]
pub trait DomainRepository: Send + Sync {
    /// Find domain by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Domain>>;

    /// List all domains
    async fn list(&self) -> AppResult<Vec<Domain>>;

    /// Persist a validated registration
    async fn create(&self, new: NewDomain) -> AppResult<Domain>;

    /// Write back an edited domain's mutable fields
    async fn update(&self, domain: &Domain) -> AppResult<Domain>;

    /// Delete domain by ID; attachments go with it (cascade)
    async fn delete(&self, id: i32) -> AppResult<()>;

    /// Persist an attachment snapshot
    async fn create_attachment(&self, new: NewAttachment) -> AppResult<Attachment>;

    /// IDs of the attachments recorded for a domain
    async fn attachment_ids(&self, domain_id: i32) -> AppResult<Vec<i32>>;
}

/// Concrete implementation of DomainRepository
pub struct DomainStore {
    db: DatabaseConnection,
}

impl DomainStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DomainRepository for DomainStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Domain>> {
        let result = DomainEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Domain::from))
    }

    async fn list(&self) -> AppResult<Vec<Domain>> {
        let models = DomainEntity::find()
            .order_by_asc(domain::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Domain::from).collect())
    }

    async fn create(&self, new: NewDomain) -> AppResult<Domain> {
        let active_model = domain::ActiveModel {
            domain_name: Set(new.domain_name),
            registered_period: Set(new.registered_period),
            registered_date: Set(new.registered_date),
            expiry_date: Set(new.expiry_date),
            domain_price: Set(new.domain_price),
            user_id: Set(new.user_id),
            ..Default::default()
        };

        match active_model.insert(&self.db).await {
            Ok(model) => Ok(Domain::from(model)),
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(AppError::conflict("Domain"))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn update(&self, updated: &Domain) -> AppResult<Domain> {
        let model = DomainEntity::find_by_id(updated.id)
            .one(&self.db)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!("Domain with id '{}' not found", updated.id))
            })?;

        // Only the edit-mutable columns are written; price and registered
        // date stay as inserted
        let mut active: domain::ActiveModel = model.into();
        active.domain_name = Set(updated.domain_name.clone());
        active.registered_period = Set(updated.registered_period);
        active.expiry_date = Set(updated.expiry_date);

        match active.update(&self.db).await {
            Ok(model) => Ok(Domain::from(model)),
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(AppError::conflict("Domain"))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        DomainEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }

    async fn create_attachment(&self, new: NewAttachment) -> AppResult<Attachment> {
        let active_model = domain_service::ActiveModel {
            domain_id: Set(new.domain_id),
            service_id: Set(new.service_id),
            domain_price: Set(new.domain_price),
            service_price: Set(new.service_price),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Attachment::from(model))
    }

    async fn attachment_ids(&self, domain_id: i32) -> AppResult<Vec<i32>> {
        let models = AttachmentEntity::find()
            .filter(domain_service::Column::DomainId.eq(domain_id))
            .order_by_asc(domain_service::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(|m| m.id).collect())
    }
}
