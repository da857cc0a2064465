//! Registry tests against a real SQLite store.
//!
//! Each test opens its own named in-memory database so the suite can run
//! in parallel without interference.

use std::sync::Arc;

use chrono::Duration;

use registrar_api::config::Config;
use registrar_api::domain::User;
use registrar_api::errors::AppError;
use registrar_api::infra::{
    Database, DomainRepository, DomainStore, ServiceRepository, ServiceStore, UserRepository,
    UserStore,
};
use registrar_api::services::{Registry, RegistryService};

struct TestStore {
    users: Arc<UserStore>,
    domains: Arc<DomainStore>,
    services: Arc<ServiceStore>,
    registry: Registry,
}

async fn setup(db_name: &str) -> TestStore {
    let url = format!("sqlite:file:{}?mode=memory&cache=shared", db_name);
    let config = Config::for_tests(url);
    let database = Database::connect(&config).await;

    let connection = database.get_connection();
    let users = Arc::new(UserStore::new(connection.clone()));
    let domains = Arc::new(DomainStore::new(connection.clone()));
    let services = Arc::new(ServiceStore::new(connection));
    let registry = Registry::new(domains.clone(), services.clone(), users.clone());

    TestStore {
        users,
        domains,
        services,
        registry,
    }
}

async fn seed_user(store: &TestStore) -> User {
    store
        .users
        .create(
            "Test User".to_string(),
            "test@example.com".to_string(),
            "hashed-password".to_string(),
        )
        .await
        .unwrap()
}

#[tokio::test]
async fn register_and_fetch_round_trip() {
    let store = setup("register_round_trip").await;
    let user = seed_user(&store).await;

    let details = store
        .registry
        .register_domain("example.org".to_string(), 3, user.id)
        .await
        .unwrap();

    assert_eq!(details.domain.domain_name, "example.org");
    assert_eq!(details.domain.domain_price, 86.95);
    assert_eq!(
        details.domain.expiry_date,
        details.domain.registered_date + Duration::days(3 * 365)
    );
    assert_eq!(details.owner.id, user.id);
    assert!(details.attachment_ids.is_empty());

    let fetched = store.registry.get_domain(details.domain.id).await.unwrap();
    assert_eq!(fetched.domain, details.domain);
}

#[tokio::test]
async fn duplicate_domain_name_conflicts() {
    let store = setup("duplicate_domain").await;
    let user = seed_user(&store).await;

    store
        .registry
        .register_domain("example.org".to_string(), 1, user.id)
        .await
        .unwrap();

    let err = store
        .registry
        .register_domain("example.org".to_string(), 2, user.id)
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Conflict(_)));
    assert_eq!(err.to_string(), "Domain already exists");
}

#[tokio::test]
async fn duplicate_user_email_conflicts() {
    let store = setup("duplicate_email").await;
    seed_user(&store).await;

    let err = store
        .users
        .create(
            "Other User".to_string(),
            "test@example.com".to_string(),
            "other-hash".to_string(),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Conflict(_)));
    assert_eq!(err.to_string(), "User already exists");
}

#[tokio::test]
async fn update_persists_only_mutable_fields() {
    let store = setup("update_mutable_fields").await;
    let user = seed_user(&store).await;

    let details = store
        .registry
        .register_domain("example.org".to_string(), 2, user.id)
        .await
        .unwrap();
    let registered_date = details.domain.registered_date;

    let updated = store
        .registry
        .update_domain(details.domain.id, Some("renamed.org".to_string()), Some(5))
        .await
        .unwrap();

    assert_eq!(updated.domain.domain_name, "renamed.org");
    assert_eq!(updated.domain.registered_period, 5);
    assert_eq!(updated.domain.registered_date, registered_date);
    assert_eq!(
        updated.domain.expiry_date,
        registered_date + Duration::days(5 * 365)
    );
    // Price stays at the value derived when the domain was registered
    assert_eq!(updated.domain.domain_price, 52.95);

    let fetched = store.registry.get_domain(details.domain.id).await.unwrap();
    assert_eq!(fetched.domain, updated.domain);
}

#[tokio::test]
async fn attachments_allow_duplicates_and_keep_snapshots() {
    let store = setup("attachment_snapshots").await;
    let user = seed_user(&store).await;
    let service = store
        .services
        .create("WHOIS privacy".to_string(), 10.0)
        .await
        .unwrap();

    let details = store
        .registry
        .register_domain("example.org".to_string(), 2, user.id)
        .await
        .unwrap();
    let domain_id = details.domain.id;

    let first = store
        .registry
        .attach_service(domain_id, service.id)
        .await
        .unwrap();
    assert_eq!(first.domain_price, 52.95);
    assert_eq!(first.service_price, 10.0);

    // Editing the domain afterwards must not touch the stored snapshot
    store
        .registry
        .update_domain(domain_id, None, Some(9))
        .await
        .unwrap();

    // Same service attached twice produces two independent records
    let second = store
        .registry
        .attach_service(domain_id, service.id)
        .await
        .unwrap();
    assert_ne!(second.id, first.id);
    assert_eq!(second.domain_price, 52.95);
    assert_eq!(second.service_price, 10.0);

    let ids = store.domains.attachment_ids(domain_id).await.unwrap();
    assert_eq!(ids, vec![first.id, second.id]);
}

#[tokio::test]
async fn unregister_cascades_to_attachments() {
    let store = setup("cascade_delete").await;
    let user = seed_user(&store).await;
    let service = store
        .services
        .create("Email hosting".to_string(), 25.0)
        .await
        .unwrap();

    let details = store
        .registry
        .register_domain("example.org".to_string(), 1, user.id)
        .await
        .unwrap();
    let domain_id = details.domain.id;

    store
        .registry
        .attach_service(domain_id, service.id)
        .await
        .unwrap();
    assert_eq!(store.domains.attachment_ids(domain_id).await.unwrap().len(), 1);

    store.registry.unregister_domain(domain_id).await.unwrap();

    assert!(store.domains.find_by_id(domain_id).await.unwrap().is_none());
    assert!(store
        .domains
        .attachment_ids(domain_id)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn attach_to_unknown_service_is_rejected() {
    let store = setup("attach_unknown_service").await;
    let user = seed_user(&store).await;

    let details = store
        .registry
        .register_domain("example.org".to_string(), 1, user.id)
        .await
        .unwrap();

    let err = store
        .registry
        .attach_service(details.domain.id, 999)
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Invalid domain or service ID");
}
