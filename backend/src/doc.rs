//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct generating the OpenAPI specification for
//! the REST API. Swagger UI serves it at `/docs` in debug builds.

use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User roster API",
        description = "List and create users held in a process-local store."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::create_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        crate::domain::user::User,
        crate::domain::ports::UserListing,
        crate::inbound::http::users::CreateUserRequest,
        crate::inbound::http::error::ErrorBody,
    )),
    tags(
        (name = "users", description = "User listing and creation"),
        (name = "health", description = "Liveness and readiness probes")
    )
)]
pub struct ApiDoc;
