//! HTTP inbound adapter exposing REST endpoints and the embedded frontend.

pub mod error;
pub mod health;
pub mod pages;
pub mod state;
pub mod users;

pub use error::ApiResult;
