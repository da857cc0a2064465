//! Value-added service catalog entity.
//!
//! Services are a read-only reference from the registration core's point
//! of view; rows are created out of band (see the `seed` CLI command).

use serde::Serialize;
use utoipa::ToSchema;

/// A value-added service that can be attached to a domain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Service {
    pub id: i32,
    pub service_name: String,
    pub service_price: f64,
}

/// Serialized service shape.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ServiceResponse {
    /// System-assigned identifier
    pub id: i32,
    /// Service name
    #[schema(example = "WHOIS privacy")]
    pub service_name: String,
    /// Current catalog price
    #[schema(example = 10.0)]
    pub service_price: f64,
}

impl From<Service> for ServiceResponse {
    fn from(service: Service) -> Self {
        Self {
            id: service.id,
            service_name: service.service_name,
            service_price: service.service_price,
        }
    }
}
