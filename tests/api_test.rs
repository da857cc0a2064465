//! HTTP-level tests over the full router.
//!
//! Requests are driven through `tower::ServiceExt::oneshot` against a
//! named in-memory SQLite database per test.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use chrono::{Duration, Utc};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use registrar_api::api::{create_router, AppState};
use registrar_api::config::Config;
use registrar_api::infra::{Database, ServiceRepository, ServiceStore};

async fn test_app(db_name: &str) -> (Router, Arc<Database>) {
    let url = format!("sqlite:file:{}?mode=memory&cache=shared", db_name);
    let config = Config::for_tests(url);
    let database = Arc::new(Database::connect(&config).await);
    let app = create_router(AppState::from_config(database.clone(), config));
    (app, database)
}

async fn request(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}

/// Register a user and return a bearer token for it.
async fn authenticate(app: &Router, email: &str) -> String {
    let (status, _) = request(
        app,
        Method::POST,
        "/auth/register",
        None,
        Some(json!({
            "name": "Test User",
            "email": email,
            "password": "SecurePass123!"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = request(
        app,
        Method::POST,
        "/auth/login",
        None,
        Some(json!({
            "email": email,
            "password": "SecurePass123!"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["token_type"], "Bearer");

    body["access_token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn health_reports_database_status() {
    let (app, _db) = test_app("api_health").await;

    let (status, body) = request(&app, Method::GET, "/health", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"]["status"], "healthy");
}

#[tokio::test]
async fn domain_reads_are_public() {
    let (app, _db) = test_app("api_public_reads").await;

    let (status, body) = request(&app, Method::GET, "/domains", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, body) = request(&app, Method::GET, "/domains/999", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
    assert_eq!(body["error"]["message"], "Domain with id 999 not found");
}

#[tokio::test]
async fn domain_mutations_require_a_token() {
    let (app, _db) = test_app("api_auth_required").await;

    let payload = json!({"domain_name": "example.org", "registered_period": 1});
    let (status, body) =
        request(&app, Method::POST, "/domains", None, Some(payload)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");

    let (status, _) = request(&app, Method::DELETE, "/domains/1", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = request(
        &app,
        Method::POST,
        "/domains/1/services",
        Some("not-a-real-token"),
        Some(json!({"service_id": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn register_user_validation_and_conflict() {
    let (app, _db) = test_app("api_register_user").await;

    let (status, body) = request(
        &app,
        Method::POST,
        "/auth/register",
        None,
        Some(json!({
            "name": "Test User",
            "email": "not-an-email",
            "password": "SecurePass123!"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let token_email = "dup@example.com";
    authenticate(&app, token_email).await;

    let (status, body) = request(
        &app,
        Method::POST,
        "/auth/register",
        None,
        Some(json!({
            "name": "Second User",
            "email": token_email,
            "password": "AnotherPass123!"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["message"], "User already exists");
}

#[tokio::test]
async fn login_with_wrong_password_is_unauthorized() {
    let (app, _db) = test_app("api_bad_login").await;
    authenticate(&app, "login@example.com").await;

    let (status, body) = request(
        &app,
        Method::POST,
        "/auth/login",
        None,
        Some(json!({
            "email": "login@example.com",
            "password": "wrong-password"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn register_domain_rejects_bad_input() {
    let (app, _db) = test_app("api_bad_domain_input").await;
    let token = authenticate(&app, "input@example.com").await;

    let (status, body) = request(
        &app,
        Method::POST,
        "/domains",
        Some(&token),
        Some(json!({"domain_name": "example.org", "registered_period": 10})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"]["message"],
        "Registration period must be between 1 and 9 years"
    );

    let (status, body) = request(
        &app,
        Method::POST,
        "/domains",
        Some(&token),
        Some(json!({"domain_name": "www.example.org", "registered_period": 2})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "Please enter a valid domain name");
}

#[tokio::test]
async fn domain_lifecycle_flow() {
    let (app, db) = test_app("api_domain_lifecycle").await;
    let token = authenticate(&app, "owner@example.com").await;

    // Services are seeded outside the API; the catalog is read-only
    let services = ServiceStore::new(db.get_connection());
    let service = services
        .create("WHOIS privacy".to_string(), 10.0)
        .await
        .unwrap();

    let (status, body) = request(
        &app,
        Method::POST,
        "/domains",
        Some(&token),
        Some(json!({"domain_name": "example.org", "registered_period": 3})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["domain_name"], "example.org");
    assert_eq!(body["registered_period"], 3);
    assert_eq!(body["domain_price"], 86.95);
    assert_eq!(body["user"]["email"], "owner@example.com");
    assert_eq!(body["domain_services"], json!([]));

    let today = Utc::now().date_naive();
    assert_eq!(body["registered_date"], today.to_string());
    assert_eq!(
        body["expiry_date"],
        (today + Duration::days(3 * 365)).to_string()
    );

    let domain_id = body["id"].as_i64().unwrap();

    // Duplicate registration of the same name conflicts
    let (status, body) = request(
        &app,
        Method::POST,
        "/domains",
        Some(&token),
        Some(json!({"domain_name": "example.org", "registered_period": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["message"], "Domain already exists");

    // Attach a service; both prices are frozen into the record
    let (status, body) = request(
        &app,
        Method::POST,
        &format!("/domains/{}/services", domain_id),
        Some(&token),
        Some(json!({"service_id": service.id})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["domain_price"], 86.95);
    assert_eq!(body["service_price"], 10.0);
    let attachment_id = body["id"].as_i64().unwrap();

    // Partial update: empty name is ignored, period moves the expiry
    let (status, body) = request(
        &app,
        Method::PATCH,
        &format!("/domains/{}", domain_id),
        Some(&token),
        Some(json!({"domain_name": "", "registered_period": 5})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["domain_name"], "example.org");
    assert_eq!(body["registered_period"], 5);
    assert_eq!(body["domain_price"], 86.95);
    assert_eq!(
        body["expiry_date"],
        (today + Duration::days(5 * 365)).to_string()
    );
    assert_eq!(body["domain_services"], json!([{"id": attachment_id}]));

    // Unregister; the attachment goes with the domain
    let (status, body) = request(
        &app,
        Method::DELETE,
        &format!("/domains/{}", domain_id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["message"],
        format!("Domain id '{}' unregistered successfully", domain_id)
    );

    let (status, _) = request(
        &app,
        Method::GET,
        &format!("/domains/{}", domain_id),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn service_catalog_is_readable_without_auth() {
    let (app, db) = test_app("api_service_catalog").await;

    let services = ServiceStore::new(db.get_connection());
    let service = services
        .create("SSL certificate".to_string(), 49.95)
        .await
        .unwrap();

    let (status, body) = request(&app, Method::GET, "/services", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["service_name"], "SSL certificate");
    assert_eq!(body[0]["service_price"], 49.95);

    let (status, body) = request(
        &app,
        Method::GET,
        &format!("/services/{}", service.id),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], service.id);

    let (status, body) = request(&app, Method::GET, "/services/999", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "Service with id 999 not found");
}
