//! # Form Management Routes
//!
//! Owner-scoped endpoints under `/api/forms`. Each handler resolves the
//! caller through the configured `IdentityOracle` and hands the result to
//! `FormService`; a request without a principal gets `401`.
//!
//! ## Sub-modules:
//! - `create`: validates and stores a new form.
//! - `list`: the caller's forms, newest first.
//! - `stats`: visit/submission totals and rates.
//! - `get`: a single owned form.
//! - `update_content`: saves the builder layout.
//! - `publish`: opens the form to public submissions.
//! - `submissions`: an owned form with every response it received.

mod create;
mod get;
mod list;
mod publish;
mod stats;
mod submissions;
mod update_content;

use actix_web::web::{get, post, put, scope};
use actix_web::Scope;

/// The base path for all owner-scoped form endpoints.
const API_PATH: &str = "/api/forms";

/// Configures and returns the Actix `Scope` for form management.
///
/// # Registered Routes:
///
/// *   **`POST /`** → `create::process`: body `CreateFormRequest`, answers `201 {"id": n}`.
/// *   **`GET /`** → `list::process`: `200 [Form]`.
/// *   **`GET /stats`** → `stats::process`: `200 FormStats`.
/// *   **`GET /{id}`** → `get::process`: `200 Form`, `404` when the caller owns no such form.
/// *   **`PUT /{id}/content`** → `update_content::process`: body `UpdateFormContentRequest`.
/// *   **`POST /{id}/publish`** → `publish::process`.
/// *   **`GET /{id}/submissions`** → `submissions::process`: `200 FormWithSubmissions`.
///
/// `/stats` is registered ahead of `/{id}` so it is never read as an id.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", post().to(create::process))
        .route("", get().to(list::process))
        .route("/stats", get().to(stats::process))
        .route("/{id}", get().to(get::process))
        .route("/{id}/content", put().to(update_content::process))
        .route("/{id}/publish", post().to(publish::process))
        .route("/{id}/submissions", get().to(submissions::process))
}
