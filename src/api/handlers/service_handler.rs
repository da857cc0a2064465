//! Service catalog handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::AppState;
use crate::domain::ServiceResponse;
use crate::errors::AppResult;

/// Create service catalog routes
pub fn service_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_services))
        .route("/:id", get(get_service))
}

/// List the service catalog
#[utoipa::path(
    get,
    path = "/services",
    tag = "Services",
    responses(
        (status = 200, description = "List of all services", body = Vec<ServiceResponse>)
    )
)]
pub async fn list_services(State(state): State<AppState>) -> AppResult<Json<Vec<ServiceResponse>>> {
    let services = state.catalog.list_services().await?;
    Ok(Json(services.into_iter().map(ServiceResponse::from).collect()))
}

/// Get a service by ID
#[utoipa::path(
    get,
    path = "/services/{id}",
    tag = "Services",
    params(
        ("id" = i32, Path, description = "Service ID")
    ),
    responses(
        (status = 200, description = "Service found", body = ServiceResponse),
        (status = 404, description = "Service not found")
    )
)]
pub async fn get_service(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ServiceResponse>> {
    let service = state.catalog.get_service(id).await?;
    Ok(Json(ServiceResponse::from(service)))
}
