//! Domain ports defining the edges of the hexagon.
//!
//! Driving ports ([`UsersQuery`], [`UsersCommand`]) describe what inbound
//! adapters may ask of the domain; the driven port ([`UserStore`]) describes
//! what the domain expects from its storage adapter.

use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use super::{Error, User};

/// Raw creation payload as received from an inbound adapter.
///
/// Fields are optional so the domain can report missing values itself rather
/// than relying on deserialization failures.
#[derive(Debug, Clone, Default)]
pub struct NewUser {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub active: Option<bool>,
}

/// Full roster snapshot plus its count.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserListing {
    pub users: Vec<User>,
    #[schema(example = 2)]
    pub total: usize,
}

/// Ordered storage for user records.
///
/// Append enforces no uniqueness; that is the service's responsibility, so
/// the service must hold the only handle through which writes happen.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// All users in insertion order.
    async fn list(&self) -> Vec<User>;

    /// Add a user to the end of the sequence.
    async fn append(&self, user: User);
}

/// Read side of the user service.
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Return every stored user and the total count. Always succeeds.
    async fn list_users(&self) -> UserListing;
}

/// Write side of the user service.
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Validate the payload, enforce email uniqueness, and store the user.
    async fn create_user(&self, request: NewUser) -> Result<User, Error>;
}
