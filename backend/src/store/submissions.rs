use super::forms::submission_from_row;
use super::{now_ms, FormStore, StoreError};
use common::model::form::FormSubmission;
use log::debug;
use rusqlite::{params, OptionalExtension, TransactionBehavior};

/// Result of [`FormStore::submit`].
///
/// A submission either lands together with its counter increment, or neither
/// is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted(FormSubmission),
    NotPublished,
    NotFound,
}

impl FormStore {
    /// Records a response against the form behind `share_url`.
    ///
    /// Runs as a single `BEGIN IMMEDIATE` transaction: bump `submissions` on
    /// the published form, insert the submission row, commit. If no published
    /// form matched, the transaction is dropped uncommitted.
    pub fn submit(&self, share_url: &str, content: &str) -> Result<SubmitOutcome, StoreError> {
        let mut conn = self.connect()?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let form_id: Option<i64> = tx
            .query_row(
                "UPDATE forms SET submissions = submissions + 1 \
                 WHERE share_url = ?1 AND published = 1 RETURNING id",
                params![share_url],
                |row| row.get(0),
            )
            .optional()?;

        let Some(form_id) = form_id else {
            let exists = tx
                .query_row(
                    "SELECT 1 FROM forms WHERE share_url = ?1",
                    params![share_url],
                    |_| Ok(()),
                )
                .optional()?
                .is_some();
            return Ok(if exists {
                SubmitOutcome::NotPublished
            } else {
                SubmitOutcome::NotFound
            });
        };

        let submission = tx.query_row(
            "INSERT INTO form_submissions (form_id, content, created_at_ms) \
             VALUES (?1, ?2, ?3) RETURNING id, form_id, content, created_at_ms",
            params![form_id, content, now_ms()],
            submission_from_row,
        )?;
        tx.commit()?;

        debug!("stored submission {} for form {}", submission.id, form_id);
        Ok(SubmitOutcome::Accepted(submission))
    }
}
