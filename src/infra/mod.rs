//! Infrastructure layer - External systems integration
//!
//! Database connection management and the repository implementations
//! that back the persistence traits.

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{
    DomainRepository, DomainStore, ServiceRepository, ServiceStore, UserRepository, UserStore,
};
