//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{auth_handler, domain_handler, service_handler};
use crate::domain::{
    AttachmentRef, AttachmentResponse, DomainResponse, ServiceResponse, UserResponse, UserSummary,
};
use crate::services::TokenResponse;
use crate::types::MessageResponse;

/// OpenAPI documentation for the Registrar API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Registrar API",
        version = "0.1.0",
        description = "Domain registration REST API with Axum and SeaORM",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // Authentication endpoints
        auth_handler::register,
        auth_handler::login,
        // Domain endpoints
        domain_handler::list_domains,
        domain_handler::get_domain,
        domain_handler::register_domain,
        domain_handler::update_domain,
        domain_handler::unregister_domain,
        domain_handler::attach_service,
        // Service catalog endpoints
        service_handler::list_services,
        service_handler::get_service,
    ),
    components(
        schemas(
            // Domain types
            DomainResponse,
            AttachmentRef,
            AttachmentResponse,
            ServiceResponse,
            UserResponse,
            UserSummary,
            MessageResponse,
            // Auth types
            auth_handler::RegisterRequest,
            auth_handler::LoginRequest,
            TokenResponse,
            // Domain handler types
            domain_handler::RegisterDomainRequest,
            domain_handler::UpdateDomainRequest,
            domain_handler::AttachServiceRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "User registration and login"),
        (name = "Domains", description = "Domain registration lifecycle"),
        (name = "Services", description = "Value-added service catalog")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT token obtained from /auth/login"))
                        .build(),
                ),
            );
        }
    }
}
