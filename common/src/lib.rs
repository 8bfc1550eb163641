//! Types shared between the forms backend and any client that talks to it.
//!
//! - `model`: persisted records (`Form`, `FormSubmission`) and derived views (`FormStats`).
//! - `requests`: JSON payloads accepted by the HTTP API.

pub mod model;
pub mod requests;
