use crate::error::FormError;
use crate::identity::IdentityOracle;
use crate::lifecycle::FormService;
use crate::services::run_blocking;
use actix_web::{web, HttpRequest, HttpResponse};

/// Actix handler for `POST /api/forms/{id}/publish`. Publishing twice is harmless.
pub async fn process(
    req: HttpRequest,
    identity: web::Data<dyn IdentityOracle>,
    service: web::Data<FormService>,
    id: web::Path<i64>,
) -> Result<HttpResponse, FormError> {
    let principal = identity.current_principal(&req);
    let service = service.into_inner();
    let id = id.into_inner();

    let form = run_blocking(move || service.publish_form(principal.as_ref(), id)).await?;
    Ok(HttpResponse::Ok().json(form))
}
