//! End-to-end flow over the seeded roster: list, create, conflict handling,
//! and health probes, exercised through the assembled app.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{test as actix_test, web};
use mockable::{Clock, DefaultClock};
use serde_json::{Value, json};

use backend::domain::UserService;
use backend::inbound::http::health::HealthState;
use backend::inbound::http::state::HttpState;
use backend::outbound::memory::InMemoryUserStore;
use backend::server::build_app;

fn seeded_state() -> HttpState {
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let store = InMemoryUserStore::with_seed_users(clock.as_ref());
    HttpState::from_service(Arc::new(UserService::new(Arc::new(store), clock)))
}

fn app_parts() -> (web::Data<HealthState>, web::Data<HttpState>) {
    (
        web::Data::new(HealthState::new()),
        web::Data::new(seeded_state()),
    )
}

async fn total_of(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
) -> u64 {
    let request = actix_test::TestRequest::get().uri("/api/users").to_request();
    let response = actix_test::call_service(app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let listing: Value = actix_test::read_body_json(response).await;
    listing.get("total").and_then(Value::as_u64).expect("total")
}

#[actix_web::test]
async fn roster_grows_with_each_successful_creation() {
    let (health, state) = app_parts();
    let app = actix_test::init_service(build_app(health, state)).await;

    assert_eq!(total_of(&app).await, 2);

    for (index, email) in ["ann@test.com", "ben@test.com", "cat@test.com"]
        .iter()
        .enumerate()
    {
        let request = actix_test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({
                "firstName": "User",
                "lastName": format!("Number{index}"),
                "email": email
            }))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(total_of(&app).await, 3 + index as u64);
    }
}

#[actix_web::test]
async fn creation_normalizes_email_and_defaults_active() {
    let (health, state) = app_parts();
    let app = actix_test::init_service(build_app(health, state)).await;

    let request = actix_test::TestRequest::post()
        .uri("/api/users")
        .set_json(json!({
            "firstName": "Ann",
            "lastName": "Lee",
            "email": "Ann@Test.com"
        }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let created: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        created.get("email").and_then(Value::as_str),
        Some("ann@test.com")
    );
    assert_eq!(created.get("active").and_then(Value::as_bool), Some(true));
    assert_eq!(total_of(&app).await, 3);
}

#[actix_web::test]
async fn duplicate_email_leaves_the_roster_unchanged() {
    let (health, state) = app_parts();
    let app = actix_test::init_service(build_app(health, state)).await;

    let request = actix_test::TestRequest::post()
        .uri("/api/users")
        .set_json(json!({
            "firstName": "Jane",
            "lastName": "Again",
            "email": "JANE.SMITH@example.com"
        }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(total_of(&app).await, 2);
}

#[actix_web::test]
async fn health_probes_reflect_readiness_state() {
    let health = web::Data::new(HealthState::new());
    let state = web::Data::new(seeded_state());
    let app = actix_test::init_service(build_app(health.clone(), state)).await;

    let before = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/health/ready")
            .to_request(),
    )
    .await;
    assert_eq!(before.status(), StatusCode::SERVICE_UNAVAILABLE);

    health.mark_ready();
    let after = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/health/ready")
            .to_request(),
    )
    .await;
    assert_eq!(after.status(), StatusCode::OK);

    let live = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/health/live")
            .to_request(),
    )
    .await;
    assert_eq!(live.status(), StatusCode::OK);
}
