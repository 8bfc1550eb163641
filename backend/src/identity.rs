//! Identity oracle: answers "who is making this request?".
//!
//! The service never authenticates anyone itself. Handlers ask the configured
//! `IdentityOracle` once per request and pass the answer down explicitly, so
//! the lifecycle operations stay free of ambient state.

use actix_web::HttpRequest;

/// The authenticated identity behind a request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Principal {
    pub id: String,
}

impl Principal {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

pub trait IdentityOracle: Send + Sync {
    fn current_principal(&self, req: &HttpRequest) -> Option<Principal>;
}

/// Trusts a header set by an authenticating reverse proxy in front of the server.
///
/// A missing, non-UTF-8 or blank header yields no principal.
#[derive(Debug, Clone)]
pub struct HeaderIdentity {
    header: String,
}

impl HeaderIdentity {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
        }
    }
}

impl IdentityOracle for HeaderIdentity {
    fn current_principal(&self, req: &HttpRequest) -> Option<Principal> {
        let value = req.headers().get(self.header.as_str())?.to_str().ok()?.trim();
        if value.is_empty() {
            return None;
        }
        Some(Principal::new(value))
    }
}
