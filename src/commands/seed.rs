//! Seed command - Populates the service catalog.
//!
//! Services are read-only through the API, so this is the only way rows
//! get into the catalog. Seeding an already-populated catalog is a no-op.

use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::{Database, ServiceRepository, ServiceStore};

/// Default catalog offerings: (name, price)
const DEFAULT_SERVICES: &[(&str, f64)] = &[
    ("WHOIS privacy", 10.00),
    ("Email hosting", 25.00),
    ("SSL certificate", 49.95),
    ("DNS management", 15.50),
];

/// Execute the seed command
pub async fn execute(config: Config) -> AppResult<()> {
    let db = Database::connect(&config).await;
    let services = ServiceStore::new(db.get_connection());

    if !services.list().await?.is_empty() {
        tracing::info!("Service catalog already seeded, nothing to do");
        return Ok(());
    }

    for (name, price) in DEFAULT_SERVICES {
        let service = services.create((*name).to_string(), *price).await?;
        tracing::info!(id = service.id, name = %service.service_name, "service seeded");
    }

    tracing::info!("Service catalog seeded");
    Ok(())
}
