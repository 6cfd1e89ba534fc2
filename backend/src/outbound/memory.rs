//! In-memory driven adapter for the user store.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockable::Clock;

use crate::domain::ports::UserStore;
use crate::domain::user::{User, UserDraft, UserId};

/// Process-local user storage behind a mutex.
///
/// The mutex serializes `list`/`append` across actix workers so the
/// service's uniqueness check cannot interleave with a concurrent append.
/// Contents are lost when the process terminates.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the fixture users installed at startup.
    pub fn with_seed_users(clock: &dyn Clock) -> Self {
        let now = clock.utc();
        Self {
            users: Mutex::new(vec![
                seed_user("John", "Doe", "john.doe@example.com", true, now),
                seed_user("Jane", "Smith", "jane.smith@example.com", false, now),
            ]),
        }
    }

    fn guard(&self) -> std::sync::MutexGuard<'_, Vec<User>> {
        self.users.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn seed_user(first: &str, last: &str, email: &str, active: bool, at: DateTime<Utc>) -> User {
    let draft = match UserDraft::new(
        Some(first.to_owned()),
        Some(last.to_owned()),
        Some(email.to_owned()),
        Some(active),
    ) {
        Ok(draft) => draft,
        Err(err) => panic!("seed user data must satisfy validation: {err}"),
    };
    User::from_draft(draft, UserId::random(), at)
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn list(&self) -> Vec<User> {
        self.guard().clone()
    }

    async fn append(&self, user: User) {
        self.guard().push(user);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockable::DefaultClock;

    fn user(email: &str) -> User {
        seed_user("Test", "User", email, true, Utc::now())
    }

    #[tokio::test]
    async fn append_preserves_insertion_order() {
        let store = InMemoryUserStore::new();
        store.append(user("first@example.com")).await;
        store.append(user("second@example.com")).await;

        let listed = store.list().await;
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].email().as_str(), "first@example.com");
        assert_eq!(listed[1].email().as_str(), "second@example.com");
    }

    #[tokio::test]
    async fn seeded_store_holds_the_two_fixture_users() {
        let store = InMemoryUserStore::with_seed_users(&DefaultClock);

        let listed = store.list().await;
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].email().as_str(), "john.doe@example.com");
        assert!(listed[0].active());
        assert_eq!(listed[1].email().as_str(), "jane.smith@example.com");
        assert!(!listed[1].active());
    }

    #[tokio::test]
    async fn list_returns_a_snapshot_not_a_view() {
        let store = InMemoryUserStore::new();
        let snapshot = store.list().await;
        store.append(user("late@example.com")).await;
        assert!(snapshot.is_empty());
    }
}
