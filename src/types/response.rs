use serde::Serialize;
use utoipa::ToSchema;

/// Message-only response, used by delete confirmations.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    /// Human-readable confirmation
    #[schema(example = "Domain id '3' unregistered successfully")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
