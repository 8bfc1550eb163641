use crate::error::FormError;
use crate::identity::IdentityOracle;
use crate::lifecycle::FormService;
use crate::services::run_blocking;
use actix_web::{web, HttpRequest, HttpResponse};

/// Actix handler for `GET /api/forms/stats`.
///
/// Anonymous callers get the same `401` as every other owner-scoped route;
/// sending them to a sign-in page is the client's call.
pub async fn process(
    req: HttpRequest,
    identity: web::Data<dyn IdentityOracle>,
    service: web::Data<FormService>,
) -> Result<HttpResponse, FormError> {
    let principal = identity.current_principal(&req);
    let service = service.into_inner();

    let stats = run_blocking(move || service.get_form_stats(principal.as_ref())).await?;
    Ok(HttpResponse::Ok().json(stats))
}
