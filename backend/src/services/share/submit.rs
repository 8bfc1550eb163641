//! # Public Submission Service
//!
//! Backs `POST /api/share/{share_url}`, the endpoint anonymous respondents hit.
//!
//! The store bumps the form's `submissions` counter and inserts the
//! submission row in one `BEGIN IMMEDIATE` transaction, conditioned on the
//! form being published. A rejected submission leaves both the counter and
//! the submissions table untouched.

use crate::error::FormError;
use crate::lifecycle::FormService;
use crate::services::run_blocking;
use actix_web::{web, HttpResponse};
use common::requests::SubmitFormRequest;

/// Actix handler for `POST /api/share/{share_url}`.
///
/// # Arguments
/// * `share_url` - The public token of the form, taken from the URL path.
/// * `payload` - The response content, stored verbatim.
///
/// # Returns
/// - `201 Created` with the stored `FormSubmission`.
/// - `409 Conflict` (`not_published`) while the form is unpublished.
/// - `404 Not Found` when no form carries this share URL.
pub async fn process(
    service: web::Data<FormService>,
    share_url: web::Path<String>,
    payload: web::Json<SubmitFormRequest>,
) -> Result<HttpResponse, FormError> {
    let service = service.into_inner();
    let share_url = share_url.into_inner();
    let content = payload.into_inner().content;

    let submission = run_blocking(move || service.submit_form(&share_url, &content)).await?;
    Ok(HttpResponse::Created().json(submission))
}
