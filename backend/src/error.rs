//! Failure taxonomy of the forms service and its HTTP mapping.

use crate::store::StoreError;
use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormError {
    /// No principal was attached to a request that needs one.
    #[error("authentication required")]
    AuthenticationRequired,
    #[error("form not valid: {0}")]
    Validation(String),
    /// The form does not exist, or belongs to somebody else. Callers cannot tell which.
    #[error("form not found")]
    NotFound,
    #[error("form is not published")]
    NotPublished,
    /// The request body exceeded the configured JSON limit.
    #[error("{0}")]
    PayloadTooLarge(String),
    #[error(transparent)]
    Store(#[from] StoreError),
    /// The blocking worker running a store call died before returning.
    #[error("worker failed: {0}")]
    Worker(String),
}

impl FormError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AuthenticationRequired => "authentication_required",
            Self::Validation(_) => "validation_error",
            Self::NotFound => "not_found",
            Self::NotPublished => "not_published",
            Self::PayloadTooLarge(_) => "payload_too_large",
            Self::Store(_) => "store_error",
            Self::Worker(_) => "worker_error",
        }
    }
}

/// Bodies that are too big get their own kind; anything else actix rejects
/// while reading JSON (bad syntax, missing fields, wrong content type) is a
/// validation failure.
impl From<JsonPayloadError> for FormError {
    fn from(err: JsonPayloadError) -> Self {
        match err {
            JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
                Self::PayloadTooLarge(err.to_string())
            }
            other => Self::Validation(other.to_string()),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
}

impl ResponseError for FormError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::AuthenticationRequired => StatusCode::UNAUTHORIZED,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::NotPublished => StatusCode::CONFLICT,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Store(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Worker(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.kind(),
            message: self.to_string(),
        })
    }
}
