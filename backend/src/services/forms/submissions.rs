use crate::error::FormError;
use crate::identity::IdentityOracle;
use crate::lifecycle::FormService;
use crate::services::run_blocking;
use actix_web::{web, HttpRequest, HttpResponse};

/// Actix handler for `GET /api/forms/{id}/submissions`.
pub async fn process(
    req: HttpRequest,
    identity: web::Data<dyn IdentityOracle>,
    service: web::Data<FormService>,
    id: web::Path<i64>,
) -> Result<HttpResponse, FormError> {
    let principal = identity.current_principal(&req);
    let service = service.into_inner();
    let id = id.into_inner();

    let form = run_blocking(move || service.get_form_with_submissions(principal.as_ref(), id))
        .await?
        .ok_or(FormError::NotFound)?;
    Ok(HttpResponse::Ok().json(form))
}
