//! Domain registration entity and its construction/edit invariants.

use chrono::{NaiveDate, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::config::{MAX_REGISTERED_PERIOD, MIN_REGISTERED_PERIOD};
use crate::domain::rules;
use crate::domain::user::UserSummary;
use crate::errors::{AppError, AppResult};

/// A registered domain as stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Domain {
    pub id: i32,
    pub domain_name: String,
    pub registered_period: i32,
    pub registered_date: NaiveDate,
    pub expiry_date: NaiveDate,
    pub domain_price: f64,
    pub user_id: i32,
}

/// A validated registration that has not been persisted yet.
///
/// Construction is the only place the period range and name syntax are
/// enforced; edits deliberately skip both checks (see `Domain::apply_edit`).
#[derive(Debug, Clone, PartialEq)]
pub struct NewDomain {
    pub domain_name: String,
    pub registered_period: i32,
    pub registered_date: NaiveDate,
    pub expiry_date: NaiveDate,
    pub domain_price: f64,
    pub user_id: i32,
}

impl NewDomain {
    /// Validate and build a registration for the current UTC date.
    ///
    /// Fails fast: the period range is checked before any other work, then
    /// the name syntax, and nothing is persisted on either failure.
    pub fn register(domain_name: String, registered_period: i32, user_id: i32) -> AppResult<Self> {
        if !(MIN_REGISTERED_PERIOD..=MAX_REGISTERED_PERIOD).contains(&registered_period) {
            return Err(AppError::validation(
                "Registration period must be between 1 and 9 years",
            ));
        }
        if !rules::is_valid_domain_name(&domain_name) {
            return Err(AppError::validation("Please enter a valid domain name"));
        }

        let registered_date = Utc::now().date_naive();
        Ok(Self {
            domain_name,
            registered_period,
            registered_date,
            expiry_date: rules::expiry_date(registered_date, registered_period),
            domain_price: rules::price_for_period(registered_period),
            user_id,
        })
    }
}

impl Domain {
    /// Merge an edit payload into the domain.
    ///
    /// A field is authoritative only if present and non-empty: an empty
    /// name or a zero period leaves the current value untouched, so an
    /// empty string cannot clear a field. After the merge only the expiry
    /// date is recomputed, from the original registered date and the
    /// possibly-new period; the price stays locked at registration and no
    /// range or syntax re-validation runs.
    pub fn apply_edit(&mut self, domain_name: Option<String>, registered_period: Option<i32>) {
        if let Some(name) = domain_name.filter(|n| !n.is_empty()) {
            self.domain_name = name;
        }
        if let Some(period) = registered_period.filter(|p| *p != 0) {
            self.registered_period = period;
        }
        self.expiry_date = rules::expiry_date(self.registered_date, self.registered_period);
    }
}

/// A domain together with the related rows its serialization needs.
#[derive(Debug, Clone)]
pub struct DomainDetails {
    pub domain: Domain,
    pub owner: UserSummary,
    pub attachment_ids: Vec<i32>,
}

/// Reference to an attachment, serialized as `{"id": ...}`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AttachmentRef {
    pub id: i32,
}

/// Serialized domain shape; field order is part of the contract.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DomainResponse {
    /// System-assigned identifier
    pub id: i32,
    /// Registered name, globally unique
    #[schema(example = "example.org")]
    pub domain_name: String,
    /// Registration period in years
    #[schema(example = 3)]
    pub registered_period: i32,
    /// Date the domain was registered
    pub registered_date: NaiveDate,
    /// Derived expiry date (registered date + 365 days per year)
    pub expiry_date: NaiveDate,
    /// Price derived from the period at registration time
    #[schema(example = 86.95)]
    pub domain_price: f64,
    /// Owning user
    pub user: UserSummary,
    /// Attached services, by attachment id
    pub domain_services: Vec<AttachmentRef>,
}

impl From<DomainDetails> for DomainResponse {
    fn from(details: DomainDetails) -> Self {
        Self {
            id: details.domain.id,
            domain_name: details.domain.domain_name,
            registered_period: details.domain.registered_period,
            registered_date: details.domain.registered_date,
            expiry_date: details.domain.expiry_date,
            domain_price: details.domain.domain_price,
            user: details.owner,
            domain_services: details
                .attachment_ids
                .into_iter()
                .map(|id| AttachmentRef { id })
                .collect(),
        }
    }
}
