//! Domain layer - Core business entities and rules.
//!
//! Contains the registration entities and the pure pricing/validation
//! rules they are built from, independent of infrastructure concerns.

pub mod attachment;
pub mod offering;
pub mod password;
pub mod registration;
pub mod rules;
pub mod user;

pub use attachment::{Attachment, AttachmentResponse, NewAttachment};
pub use offering::{Service, ServiceResponse};
pub use password::Password;
pub use registration::{AttachmentRef, Domain, DomainDetails, DomainResponse, NewDomain};
pub use user::{User, UserResponse, UserSummary};
