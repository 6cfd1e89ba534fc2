//! Users API handlers.
//!
//! ```text
//! GET  /api/users
//! POST /api/users {"firstName":"Ann","lastName":"Lee","email":"ann@test.com"}
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};

use crate::domain::User;
use crate::domain::ports::{NewUser, UserListing};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::state::HttpState;

/// Creation request body for `POST /api/users`.
///
/// All fields are optional at the wire level; the domain reports missing
/// required values with a `400` instead of a deserialization failure.
#[derive(Debug, Clone, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[serde(default)]
    #[schema(example = "Ann")]
    pub first_name: Option<String>,
    #[serde(default)]
    #[schema(example = "Lee")]
    pub last_name: Option<String>,
    #[serde(default)]
    #[schema(example = "ann@test.com")]
    pub email: Option<String>,
    /// Defaults to true when omitted.
    #[serde(default)]
    pub active: Option<bool>,
}

impl From<CreateUserRequest> for NewUser {
    fn from(value: CreateUserRequest) -> Self {
        Self {
            first_name: value.first_name,
            last_name: value.last_name,
            email: value.email,
            active: value.active,
        }
    }
}

/// List all users in insertion order.
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "Users and total count", body = UserListing),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<UserListing>> {
    Ok(web::Json(state.users_query.list_users().await))
}

/// Create a user after validation and the duplicate-email check.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Missing fields or bad email format", body = ErrorBody),
        (status = 409, description = "Duplicate email", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserRequest>,
) -> ApiResult<HttpResponse> {
    let user = state
        .users_command
        .create_user(payload.into_inner().into())
        .await?;
    Ok(HttpResponse::Created().json(user))
}
