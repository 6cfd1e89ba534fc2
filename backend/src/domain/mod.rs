//! Domain primitives and the user service.
//!
//! Purpose: hold the transport-agnostic model (users, validation, errors)
//! and the service that enforces the email-uniqueness invariant. Inbound
//! adapters depend on the ports in [`ports`], never on adapters directly.

pub mod error;
pub mod ports;
pub mod user;
pub mod user_service;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::user::{Email, User, UserDraft, UserId, UserValidationError};
pub use self::user_service::UserService;
