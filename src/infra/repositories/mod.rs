//! Repository layer - Data access abstraction
//!
//! One trait per aggregate, each with a SeaORM-backed store. Services
//! depend on the traits so tests can substitute mocks.

pub(crate) mod entities;

mod domain_repository;
mod service_repository;
mod user_repository;

pub use domain_repository::{DomainRepository, DomainStore};
pub use service_repository::{ServiceRepository, ServiceStore};
pub use user_repository::{UserRepository, UserStore};
