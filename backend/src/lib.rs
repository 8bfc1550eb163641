//! Forms backend: owner-scoped form management plus public share-link
//! traffic, served over actix-web and stored in SQLite.

pub mod config;
pub mod error;
pub mod identity;
pub mod lifecycle;
pub mod services;
pub mod store;
pub mod validation;

use crate::error::FormError;
use crate::identity::IdentityOracle;
use crate::lifecycle::FormService;
use actix_web::web;
use std::sync::Arc;

/// Everything the routes need, shared across actix workers.
#[derive(Clone)]
pub struct AppState {
    service: web::Data<FormService>,
    identity: web::Data<dyn IdentityOracle>,
    json_limit: usize,
}

impl AppState {
    pub fn new(service: FormService, identity: Arc<dyn IdentityOracle>, json_limit: usize) -> Self {
        Self {
            service: web::Data::new(service),
            identity: web::Data::from(identity),
            json_limit,
        }
    }

    /// Registers app data and both route scopes on an `App` or test service.
    ///
    /// Body and path extraction failures answer with the same JSON error
    /// body as the handlers: a malformed body is a validation error, an
    /// unparsable `{id}` is a missing form.
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(
            web::JsonConfig::default()
                .limit(self.json_limit)
                .error_handler(|err, _req| FormError::from(err).into()),
        )
        .app_data(
            web::PathConfig::default().error_handler(|_err, _req| FormError::NotFound.into()),
        )
        .app_data(self.service.clone())
        .app_data(self.identity.clone())
        .service(services::forms::configure_routes())
        .service(services::share::configure_routes());
    }
}
