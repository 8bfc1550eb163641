//! # Public Form Content Service
//!
//! Backs `GET /api/share/{share_url}`. Every call counts one visit with a
//! single atomic `UPDATE ... RETURNING content`, whether or not the form is
//! published: visits measure link access, not submission eligibility.

use crate::error::FormError;
use crate::lifecycle::FormService;
use crate::services::run_blocking;
use actix_web::{web, HttpResponse};
use common::model::form::SharedFormContent;

/// Actix handler for `GET /api/share/{share_url}`.
///
/// # Returns
/// - `200 OK` with `{"content": "..."}`. The visit is counted first.
/// - `404 Not Found` when no form carries this share URL.
pub async fn process(
    service: web::Data<FormService>,
    share_url: web::Path<String>,
) -> Result<HttpResponse, FormError> {
    let service = service.into_inner();
    let share_url = share_url.into_inner();

    let content =
        run_blocking(move || service.get_form_content_by_share_url(&share_url)).await?;
    Ok(HttpResponse::Ok().json(SharedFormContent { content }))
}
