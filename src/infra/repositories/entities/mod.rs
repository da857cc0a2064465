//! SeaORM entity definitions
//!
//! Database-specific entities, kept separate from the domain models.

pub mod domain;
pub mod domain_service;
pub mod service;
pub mod user;
