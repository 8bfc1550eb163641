//! # Public Share Routes
//!
//! Anonymous endpoints reached through a form's share URL. No principal is
//! consulted here.
//!
//! *   **`GET /api/share/{share_url}`** → `content::process`: counts a visit and
//!     returns `{"content": "..."}`. Works for unpublished forms too.
//! *   **`POST /api/share/{share_url}`** → `submit::process`: body
//!     `SubmitFormRequest`, answers `201 FormSubmission`, `409` while the form
//!     is unpublished, `404` for an unknown share URL.

mod content;
mod submit;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/share";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/{share_url}", get().to(content::process))
        .route("/{share_url}", post().to(submit::process))
}
