//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and repositories to fulfill the
//! application's operations. Handlers depend on the traits, never on the
//! concrete implementations.

mod auth_service;
mod catalog_service;
mod registry_service;

pub use auth_service::{AuthService, Authenticator, Claims, TokenResponse};
pub use catalog_service::{Catalog, CatalogService};
pub use registry_service::{Registry, RegistryService};
