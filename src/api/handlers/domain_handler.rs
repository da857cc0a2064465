//! Domain handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::extractors::CurrentUser;
use crate::api::AppState;
use crate::domain::{AttachmentResponse, DomainResponse};
use crate::errors::AppResult;
use crate::types::MessageResponse;

/// Domain registration request
#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterDomainRequest {
    /// Domain name to register
    #[schema(example = "example.org")]
    pub domain_name: String,
    /// Registration period in years (1-9)
    #[schema(example = 3, minimum = 1, maximum = 9)]
    pub registered_period: i32,
}

/// Domain update request; absent or empty fields leave the current
/// value unchanged
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateDomainRequest {
    /// New domain name
    #[schema(example = "renamed.org")]
    pub domain_name: Option<String>,
    /// New registration period in years
    #[schema(example = 5)]
    pub registered_period: Option<i32>,
}

/// Service attachment request
#[derive(Debug, Deserialize, ToSchema)]
pub struct AttachServiceRequest {
    /// Catalog id of the service to attach
    #[schema(example = 1)]
    pub service_id: i32,
}

/// Create domain routes
pub fn domain_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_domains).post(register_domain))
        .route(
            "/:id",
            get(get_domain)
                .put(update_domain)
                .patch(update_domain)
                .delete(unregister_domain),
        )
        .route("/:id/services", post(attach_service))
}

/// List all registered domains
#[utoipa::path(
    get,
    path = "/domains",
    tag = "Domains",
    responses(
        (status = 200, description = "List of all domains", body = Vec<DomainResponse>)
    )
)]
pub async fn list_domains(State(state): State<AppState>) -> AppResult<Json<Vec<DomainResponse>>> {
    let domains = state.registry.list_domains().await?;
    Ok(Json(domains.into_iter().map(DomainResponse::from).collect()))
}

/// Get a domain by ID
#[utoipa::path(
    get,
    path = "/domains/{id}",
    tag = "Domains",
    params(
        ("id" = i32, Path, description = "Domain ID")
    ),
    responses(
        (status = 200, description = "Domain found", body = DomainResponse),
        (status = 404, description = "Domain not found")
    )
)]
pub async fn get_domain(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<DomainResponse>> {
    let domain = state.registry.get_domain(id).await?;
    Ok(Json(DomainResponse::from(domain)))
}

/// Register a new domain for the authenticated user
#[utoipa::path(
    post,
    path = "/domains",
    tag = "Domains",
    security(("bearer_auth" = [])),
    request_body = RegisterDomainRequest,
    responses(
        (status = 201, description = "Domain registered", body = DomainResponse),
        (status = 400, description = "Invalid period or domain name"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Domain already registered")
    )
)]
pub async fn register_domain(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(payload): Json<RegisterDomainRequest>,
) -> AppResult<(StatusCode, Json<DomainResponse>)> {
    let domain = state
        .registry
        .register_domain(payload.domain_name, payload.registered_period, user.id)
        .await?;

    Ok((StatusCode::CREATED, Json(DomainResponse::from(domain))))
}

/// Update a domain's name and/or period
#[utoipa::path(
    put,
    path = "/domains/{id}",
    tag = "Domains",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Domain ID")
    ),
    request_body = UpdateDomainRequest,
    responses(
        (status = 200, description = "Domain updated", body = DomainResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Domain not found")
    )
)]
pub async fn update_domain(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateDomainRequest>,
) -> AppResult<Json<DomainResponse>> {
    let domain = state
        .registry
        .update_domain(id, payload.domain_name, payload.registered_period)
        .await?;

    Ok(Json(DomainResponse::from(domain)))
}

/// Unregister (delete) a domain and its attachments
#[utoipa::path(
    delete,
    path = "/domains/{id}",
    tag = "Domains",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Domain ID")
    ),
    responses(
        (status = 200, description = "Domain unregistered", body = MessageResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Domain not found")
    )
)]
pub async fn unregister_domain(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.registry.unregister_domain(id).await?;

    Ok(Json(MessageResponse::new(format!(
        "Domain id '{}' unregistered successfully",
        id
    ))))
}

/// Attach a service to a domain, freezing both prices
#[utoipa::path(
    post,
    path = "/domains/{id}/services",
    tag = "Domains",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Domain ID")
    ),
    request_body = AttachServiceRequest,
    responses(
        (status = 201, description = "Service attached", body = AttachmentResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Domain or service not found")
    )
)]
pub async fn attach_service(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<i32>,
    Json(payload): Json<AttachServiceRequest>,
) -> AppResult<(StatusCode, Json<AttachmentResponse>)> {
    let attachment = state.registry.attach_service(id, payload.service_id).await?;

    Ok((StatusCode::CREATED, Json(AttachmentResponse::from(attachment))))
}
