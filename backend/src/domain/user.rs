//! User data model.

use std::fmt;
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;
use uuid::Uuid;

/// Validation errors returned when constructing user fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserValidationError {
    #[error("firstName is required and must not be empty")]
    MissingFirstName,
    #[error("lastName is required and must not be empty")]
    MissingLastName,
    #[error("email is required and must not be empty")]
    MissingEmail,
    #[error("invalid email format")]
    InvalidEmailFormat,
}

/// Stable user identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = String, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
pub struct UserId(Uuid);

impl UserId {
    /// Generate a new random [`UserId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // local@domain with at least one dot in the domain and no whitespace.
        let pattern = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Normalized email address.
///
/// Construction trims surrounding whitespace and lower-cases the input, so
/// plain equality between two [`Email`] values implements the
/// case-insensitive uniqueness comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "String", into = "String")]
#[schema(value_type = String, example = "ada@example.com")]
pub struct Email(String);

impl Email {
    /// Normalize and validate an email address.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let normalized = raw.as_ref().trim().to_lowercase();
        if normalized.is_empty() {
            return Err(UserValidationError::MissingEmail);
        }
        if !email_regex().is_match(&normalized) {
            return Err(UserValidationError::InvalidEmailFormat);
        }
        Ok(Self(normalized))
    }

    /// Borrow the normalized address.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}

impl TryFrom<String> for Email {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Validated creation payload, before identity and timestamps are assigned.
///
/// [`UserDraft::new`] accepts optional raw fields so the domain reports
/// missing values itself instead of leaving that to deserialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    first_name: String,
    last_name: String,
    email: Email,
    active: bool,
}

impl UserDraft {
    /// Validate raw input into a draft.
    ///
    /// Names are trimmed and must be non-empty; the email is normalized and
    /// format-checked; `active` defaults to true when absent.
    pub fn new(
        first_name: Option<String>,
        last_name: Option<String>,
        email: Option<String>,
        active: Option<bool>,
    ) -> Result<Self, UserValidationError> {
        let first_name = required_name(first_name, UserValidationError::MissingFirstName)?;
        let last_name = required_name(last_name, UserValidationError::MissingLastName)?;
        let email = match email {
            Some(raw) => Email::new(raw)?,
            None => return Err(UserValidationError::MissingEmail),
        };
        Ok(Self {
            first_name,
            last_name,
            email,
            active: active.unwrap_or(true),
        })
    }

    /// Normalized email carried by the draft.
    pub fn email(&self) -> &Email {
        &self.email
    }
}

fn required_name(
    value: Option<String>,
    missing: UserValidationError,
) -> Result<String, UserValidationError> {
    let trimmed = value.as_deref().map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Err(missing);
    }
    Ok(trimmed.to_owned())
}

/// Application user.
///
/// ## Invariants
/// - `email` is stored normalized; the user service guarantees no two stored
///   users share one.
/// - `created_at` and `updated_at` are equal at creation and never change
///   afterwards (no update operation exists).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: UserId,
    #[schema(example = "Ada")]
    first_name: String,
    #[schema(example = "Lovelace")]
    last_name: String,
    email: Email,
    active: bool,
    #[schema(value_type = String, format = DateTime)]
    created_at: DateTime<Utc>,
    #[schema(value_type = String, format = DateTime)]
    updated_at: DateTime<Utc>,
}

impl User {
    /// Materialize a validated draft into a stored record.
    pub fn from_draft(draft: UserDraft, id: UserId, at: DateTime<Utc>) -> Self {
        let UserDraft {
            first_name,
            last_name,
            email,
            active,
        } = draft;
        Self {
            id,
            first_name,
            last_name,
            email,
            active,
            created_at: at,
            updated_at: at,
        }
    }

    /// Stable user identifier.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Trimmed first name.
    pub fn first_name(&self) -> &str {
        self.first_name.as_str()
    }

    /// Trimmed last name.
    pub fn last_name(&self) -> &str {
        self.last_name.as_str()
    }

    /// Normalized email address.
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Whether the user is active.
    pub fn active(&self) -> bool {
        self.active
    }

    /// Creation timestamp.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Last-update timestamp.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
