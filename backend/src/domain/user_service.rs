//! User service implementing the driving ports.
//!
//! Holds the uniqueness invariant: at any point in time no two stored users
//! share a normalized email. Validation and the duplicate check short-circuit
//! via `Result`, so a failed request never reaches the store.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::info;

use crate::domain::Error;
use crate::domain::ports::{NewUser, UserListing, UserStore, UsersCommand, UsersQuery};
use crate::domain::user::{User, UserDraft, UserId, UserValidationError};

/// Domain service for listing and creating users.
#[derive(Clone)]
pub struct UserService<S> {
    store: Arc<S>,
    clock: Arc<dyn Clock>,
}

impl<S> UserService<S> {
    /// Create a new service over the given store and clock.
    pub fn new(store: Arc<S>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }
}

fn map_validation_error(error: UserValidationError) -> Error {
    Error::invalid_request(error.to_string())
}

#[async_trait]
impl<S: UserStore> UsersQuery for UserService<S> {
    async fn list_users(&self) -> UserListing {
        let users = self.store.list().await;
        let total = users.len();
        UserListing { users, total }
    }
}

#[async_trait]
impl<S: UserStore> UsersCommand for UserService<S> {
    async fn create_user(&self, request: NewUser) -> Result<User, Error> {
        let NewUser {
            first_name,
            last_name,
            email,
            active,
        } = request;
        let draft =
            UserDraft::new(first_name, last_name, email, active).map_err(map_validation_error)?;

        // The store never enforces uniqueness, so the check must happen here
        // before the append.
        let existing = self.store.list().await;
        if existing.iter().any(|user| user.email() == draft.email()) {
            return Err(Error::conflict("a user with this email already exists"));
        }

        let user = User::from_draft(draft, UserId::random(), self.clock.utc());
        self.store.append(user.clone()).await;
        info!(user_id = %user.id(), email = %user.email(), "user created");
        Ok(user)
    }
}
