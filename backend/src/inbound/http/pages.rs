//! Embedded single-page frontend.
//!
//! The roster page is compiled into the binary so the application ships as a
//! single artifact; it talks to the `/api/users` endpoints with `fetch`.

use actix_web::{HttpResponse, get, http::header::ContentType};

const INDEX_HTML: &str = include_str!("../../../static/index.html");

/// Serve the user roster page.
#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .insert_header(ContentType::html())
        .body(INDEX_HTML)
}
