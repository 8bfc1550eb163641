//! # Form Creation Service
//!
//! Backs `POST /api/forms`.
//!
//! ## Workflow
//!
//! 1.  **Body**: actix reads a `CreateFormRequest`. A malformed body is turned
//!     into a `validation_error` by the `JsonConfig` error handler before this
//!     module runs.
//! 2.  **Validation**: `FormService::create_form` checks the name and
//!     description first, so an invalid body is a `400` even for anonymous callers.
//! 3.  **Principal**: the caller is resolved through the `IdentityOracle`; none means `401`.
//! 4.  **Insert**: a new empty, unpublished form is stored with a fresh UUID
//!     share URL, on the blocking pool.

use crate::error::FormError;
use crate::identity::IdentityOracle;
use crate::lifecycle::FormService;
use crate::services::run_blocking;
use actix_web::{web, HttpRequest, HttpResponse};
use common::model::form::CreatedForm;
use common::requests::CreateFormRequest;

/// Actix handler for `POST /api/forms`.
///
/// # Returns
/// - `201 Created` with `{"id": n}` on success.
/// - `400 Bad Request` (`validation_error`) for a blank or over-long name or description.
/// - `401 Unauthorized` when no principal is attached.
/// - `503 Service Unavailable` when the insert fails.
pub async fn process(
    req: HttpRequest,
    identity: web::Data<dyn IdentityOracle>,
    service: web::Data<FormService>,
    payload: web::Json<CreateFormRequest>,
) -> Result<HttpResponse, FormError> {
    let principal = identity.current_principal(&req);
    let service = service.into_inner();
    let request = payload.into_inner();

    let id = run_blocking(move || service.create_form(principal.as_ref(), &request)).await?;
    Ok(HttpResponse::Created().json(CreatedForm { id }))
}
