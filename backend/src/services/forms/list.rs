use crate::error::FormError;
use crate::identity::IdentityOracle;
use crate::lifecycle::FormService;
use crate::services::run_blocking;
use actix_web::{web, HttpRequest, HttpResponse};

/// Actix handler for `GET /api/forms`.
pub async fn process(
    req: HttpRequest,
    identity: web::Data<dyn IdentityOracle>,
    service: web::Data<FormService>,
) -> Result<HttpResponse, FormError> {
    let principal = identity.current_principal(&req);
    let service = service.into_inner();

    let forms = run_blocking(move || service.list_forms(principal.as_ref())).await?;
    Ok(HttpResponse::Ok().json(forms))
}
