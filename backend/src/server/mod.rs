//! Server construction and app wiring.

mod config;

pub use config::ServerSettings;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use mockable::{Clock, DefaultClock};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::UserService;
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::pages::index;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::{create_user, list_users};
use crate::outbound::memory::InMemoryUserStore;

fn build_http_state(settings: &ServerSettings) -> HttpState {
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let store = if settings.seed {
        InMemoryUserStore::with_seed_users(clock.as_ref())
    } else {
        InMemoryUserStore::new()
    };
    let service = Arc::new(UserService::new(Arc::new(store), clock));
    HttpState::from_service(service)
}

/// Assemble the application: REST endpoints under `/api`, the embedded
/// frontend at `/`, health probes, and Swagger UI in debug builds.
pub fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api").service(list_users).service(create_user);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .service(api)
        .service(index)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct an Actix HTTP server from the given settings.
///
/// # Errors
/// Propagates [`std::io::Error`] when the bind address is invalid or the
/// socket cannot be bound.
pub fn create_server(
    health_state: web::Data<HealthState>,
    settings: &ServerSettings,
) -> std::io::Result<Server> {
    let http_state = web::Data::new(build_http_state(settings));
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(settings.bind_addr()?)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
