use crate::error::FormError;
use crate::identity::IdentityOracle;
use crate::lifecycle::FormService;
use crate::services::run_blocking;
use actix_web::{web, HttpRequest, HttpResponse};
use common::requests::UpdateFormContentRequest;

/// Actix handler for `PUT /api/forms/{id}/content`.
///
/// The content is the builder's serialized layout and is stored without
/// being parsed.
///
/// # Returns
/// - `200 OK` with the updated `Form`.
/// - `404 Not Found` when the caller owns no form with this id; the stored
///   content is left as it was.
/// - `401 Unauthorized` when no principal is attached.
pub async fn process(
    req: HttpRequest,
    identity: web::Data<dyn IdentityOracle>,
    service: web::Data<FormService>,
    id: web::Path<i64>,
    payload: web::Json<UpdateFormContentRequest>,
) -> Result<HttpResponse, FormError> {
    let principal = identity.current_principal(&req);
    let service = service.into_inner();
    let id = id.into_inner();
    let content = payload.into_inner().content;

    let form =
        run_blocking(move || service.update_form_content(principal.as_ref(), id, &content)).await?;
    Ok(HttpResponse::Ok().json(form))
}
