//! HTTP request handlers.

pub mod auth_handler;
pub mod domain_handler;
pub mod service_handler;

pub use auth_handler::auth_routes;
pub use domain_handler::domain_routes;
pub use service_handler::service_routes;
