//! Registry service - the domain lifecycle use cases.
//!
//! Every operation is a single request-scoped read-modify-write against
//! the repositories; concurrent edits to the same domain are
//! last-write-wins with no optimistic-concurrency check.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{
    Attachment, Domain, DomainDetails, NewAttachment, NewDomain, UserSummary,
};
use crate::errors::{AppError, AppResult};
use crate::infra::{DomainRepository, ServiceRepository, UserRepository};

/// Registry service trait for dependency injection.
#[async_trait]
pub trait RegistryService: Send + Sync {
    /// List every registered domain with its owner and attachments
    async fn list_domains(&self) -> AppResult<Vec<DomainDetails>>;

    /// Get one domain by ID
    async fn get_domain(&self, id: i32) -> AppResult<DomainDetails>;

    /// Validate and persist a new registration for the given owner
    async fn register_domain(
        &self,
        domain_name: String,
        registered_period: i32,
        owner_id: i32,
    ) -> AppResult<DomainDetails>;

    /// Apply a partial edit to a domain
    async fn update_domain(
        &self,
        id: i32,
        domain_name: Option<String>,
        registered_period: Option<i32>,
    ) -> AppResult<DomainDetails>;

    /// Delete a domain; its attachments are removed by cascade
    async fn unregister_domain(&self, id: i32) -> AppResult<()>;

    /// Attach a service to a domain, snapshotting both prices
    async fn attach_service(&self, domain_id: i32, service_id: i32) -> AppResult<Attachment>;
}

/// Concrete implementation of RegistryService over the repositories.
pub struct Registry {
    domains: Arc<dyn DomainRepository>,
    services: Arc<dyn ServiceRepository>,
    users: Arc<dyn UserRepository>,
}

impl Registry {
    /// Create new registry service instance
    pub fn new(
        domains: Arc<dyn DomainRepository>,
        services: Arc<dyn ServiceRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            domains,
            services,
            users,
        }
    }

    /// Resolve the related rows a serialized domain needs.
    ///
    /// The owner row is guaranteed by the foreign key; a miss here is a
    /// store inconsistency, not a client error.
    async fn details(&self, domain: Domain) -> AppResult<DomainDetails> {
        let owner = self
            .users
            .find_by_id(domain.user_id)
            .await?
            .ok_or_else(|| {
                AppError::internal(format!("owner record missing for domain {}", domain.id))
            })?;
        let attachment_ids = self.domains.attachment_ids(domain.id).await?;

        Ok(DomainDetails {
            domain,
            owner: UserSummary::from(owner),
            attachment_ids,
        })
    }
}

#[async_trait]
impl RegistryService for Registry {
    async fn list_domains(&self) -> AppResult<Vec<DomainDetails>> {
        let domains = self.domains.list().await?;

        let mut result = Vec::with_capacity(domains.len());
        for domain in domains {
            result.push(self.details(domain).await?);
        }
        Ok(result)
    }

    async fn get_domain(&self, id: i32) -> AppResult<DomainDetails> {
        let domain = self
            .domains
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Domain with id {} not found", id)))?;

        self.details(domain).await
    }

    async fn register_domain(
        &self,
        domain_name: String,
        registered_period: i32,
        owner_id: i32,
    ) -> AppResult<DomainDetails> {
        // Fail-fast: invariants are checked before the store is touched
        let new = NewDomain::register(domain_name, registered_period, owner_id)?;
        let domain = self.domains.create(new).await?;

        tracing::info!(
            domain = %domain.domain_name,
            period = domain.registered_period,
            "domain registered"
        );

        self.details(domain).await
    }

    async fn update_domain(
        &self,
        id: i32,
        domain_name: Option<String>,
        registered_period: Option<i32>,
    ) -> AppResult<DomainDetails> {
        let mut domain = self
            .domains
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Domain with id '{}' not found", id)))?;

        domain.apply_edit(domain_name, registered_period);
        let domain = self.domains.update(&domain).await?;

        self.details(domain).await
    }

    async fn unregister_domain(&self, id: i32) -> AppResult<()> {
        if self.domains.find_by_id(id).await?.is_none() {
            return Err(AppError::not_found(format!(
                "Domain with id '{}' not found",
                id
            )));
        }

        self.domains.delete(id).await?;
        tracing::info!(domain_id = id, "domain unregistered");
        Ok(())
    }

    async fn attach_service(&self, domain_id: i32, service_id: i32) -> AppResult<Attachment> {
        let domain = self.domains.find_by_id(domain_id).await?;
        let service = self.services.find_by_id(service_id).await?;

        // Both sides must resolve; one combined message mirrors the single
        // lookup failure the caller sees
        let (domain, service) = match (domain, service) {
            (Some(domain), Some(service)) => (domain, service),
            _ => return Err(AppError::not_found("Invalid domain or service ID")),
        };

        let snapshot = NewAttachment::snapshot(&domain, &service);
        self.domains.create_attachment(snapshot).await
    }
}
