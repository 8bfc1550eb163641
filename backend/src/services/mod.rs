//! HTTP surface of the forms backend.
//!
//! - `forms`: owner-scoped routes under `/api/forms` (needs a principal).
//! - `share`: public routes under `/api/share/{share_url}`.

pub mod forms;
pub mod share;

use crate::error::FormError;

/// Runs a blocking lifecycle call on tokio's blocking pool so SQLite work
/// never stalls an actix worker.
pub(crate) async fn run_blocking<T, F>(operation: F) -> Result<T, FormError>
where
    F: FnOnce() -> Result<T, FormError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(operation)
        .await
        .map_err(|join_err| FormError::Worker(join_err.to_string()))?
}
