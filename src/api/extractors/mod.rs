//! Custom extractors.

pub mod auth;
pub mod validated_json;

pub use auth::CurrentUser;
pub use validated_json::ValidatedJson;
