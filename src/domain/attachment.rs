//! Domain-service attachment records.
//!
//! An attachment links one domain to one service and freezes both prices
//! at the moment of attachment. Later price changes to either side must
//! never alter a stored attachment, so the snapshot fields are set once
//! here and never recomputed.

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::offering::Service;
use crate::domain::registration::Domain;

/// A stored attachment with its price snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attachment {
    pub id: i32,
    pub domain_id: i32,
    pub service_id: i32,
    pub domain_price: f64,
    pub service_price: f64,
}

/// An attachment snapshot that has not been persisted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAttachment {
    pub domain_id: i32,
    pub service_id: i32,
    pub domain_price: f64,
    pub service_price: f64,
}

impl NewAttachment {
    /// Capture both parties' current prices.
    ///
    /// Duplicate attachments are allowed: attaching the same service to
    /// the same domain twice produces two independent records.
    pub fn snapshot(domain: &Domain, service: &Service) -> Self {
        Self {
            domain_id: domain.id,
            service_id: service.id,
            domain_price: domain.domain_price,
            service_price: service.service_price,
        }
    }
}

/// Serialized attachment shape.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AttachmentResponse {
    /// System-assigned identifier
    pub id: i32,
    /// Attached domain
    pub domain_id: i32,
    /// Attached service
    pub service_id: i32,
    /// Domain price frozen at attach time
    #[schema(example = 86.95)]
    pub domain_price: f64,
    /// Service price frozen at attach time
    #[schema(example = 10.0)]
    pub service_price: f64,
}

impl From<Attachment> for AttachmentResponse {
    fn from(attachment: Attachment) -> Self {
        Self {
            id: attachment.id,
            domain_id: attachment.domain_id,
            service_id: attachment.service_id,
            domain_price: attachment.domain_price,
            service_price: attachment.service_price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_domain() -> Domain {
        Domain {
            id: 3,
            domain_name: "example.org".to_string(),
            registered_period: 3,
            registered_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            expiry_date: NaiveDate::from_ymd_opt(2027, 5, 31).unwrap(),
            domain_price: 86.95,
            user_id: 1,
        }
    }

    #[test]
    fn snapshot_copies_both_prices() {
        let domain = sample_domain();
        let service = Service {
            id: 1,
            service_name: "WHOIS privacy".to_string(),
            service_price: 10.0,
        };

        let snapshot = NewAttachment::snapshot(&domain, &service);

        assert_eq!(snapshot.domain_id, 3);
        assert_eq!(snapshot.service_id, 1);
        assert_eq!(snapshot.domain_price, 86.95);
        assert_eq!(snapshot.service_price, 10.0);
    }

    #[test]
    fn snapshot_is_detached_from_its_sources() {
        let mut domain = sample_domain();
        let service = Service {
            id: 1,
            service_name: "WHOIS privacy".to_string(),
            service_price: 10.0,
        };

        let snapshot = NewAttachment::snapshot(&domain, &service);

        // A later edit moves the domain's own price context but the
        // captured values stay put
        domain.apply_edit(None, Some(9));
        assert_eq!(snapshot.domain_price, 86.95);
        assert_eq!(snapshot.service_price, 10.0);
    }
}
