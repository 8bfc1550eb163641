use super::{now_ms, timestamp_at, FormStore, StoreError};
use common::model::form::{Form, FormSubmission, FormWithSubmissions};
use log::debug;
use rusqlite::{params, OptionalExtension, Row, TransactionBehavior};

const FORM_COLUMNS: &str = "id, user_id, name, description, content, published, share_url, \
                            visits, submissions, created_at_ms";

fn form_from_row(row: &Row<'_>) -> rusqlite::Result<Form> {
    Ok(Form {
        id: row.get(0)?,
        user_id: row.get(1)?,
        name: row.get(2)?,
        description: row.get(3)?,
        content: row.get(4)?,
        published: row.get(5)?,
        share_url: row.get(6)?,
        visits: row.get(7)?,
        submissions: row.get(8)?,
        created_at: timestamp_at(row, 9)?,
    })
}

pub(super) fn submission_from_row(row: &Row<'_>) -> rusqlite::Result<FormSubmission> {
    Ok(FormSubmission {
        id: row.get(0)?,
        form_id: row.get(1)?,
        content: row.get(2)?,
        created_at: timestamp_at(row, 3)?,
    })
}

/// Fields of a form chosen by its creator. Everything else starts at its default.
#[derive(Debug, Clone)]
pub struct NewForm<'a> {
    pub user_id: &'a str,
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub share_url: &'a str,
}

impl FormStore {
    /// Inserts an empty, unpublished form and returns the stored row.
    pub fn insert_form(&self, new_form: &NewForm<'_>) -> Result<Form, StoreError> {
        let conn = self.connect()?;
        let form = conn.query_row(
            &format!(
                "INSERT INTO forms (user_id, name, description, share_url, created_at_ms) \
                 VALUES (?1, ?2, ?3, ?4, ?5) RETURNING {FORM_COLUMNS}"
            ),
            params![
                new_form.user_id,
                new_form.name,
                new_form.description,
                new_form.share_url,
                now_ms()
            ],
            form_from_row,
        )?;
        debug!("inserted form {} for {}", form.id, form.user_id);
        Ok(form)
    }

    /// All forms owned by `user_id`, newest first.
    pub fn list_forms(&self, user_id: &str) -> Result<Vec<Form>, StoreError> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {FORM_COLUMNS} FROM forms WHERE user_id = ?1 \
             ORDER BY created_at_ms DESC, id DESC"
        ))?;
        let forms = stmt
            .query_map(params![user_id], form_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(forms)
    }

    pub fn find_owned_form(&self, user_id: &str, id: i64) -> Result<Option<Form>, StoreError> {
        let conn = self.connect()?;
        let form = conn
            .query_row(
                &format!("SELECT {FORM_COLUMNS} FROM forms WHERE user_id = ?1 AND id = ?2"),
                params![user_id, id],
                form_from_row,
            )
            .optional()?;
        Ok(form)
    }

    /// Overwrites the content of an owned form. `None` when no owned form matched.
    pub fn update_owned_content(
        &self,
        user_id: &str,
        id: i64,
        content: &str,
    ) -> Result<Option<Form>, StoreError> {
        let conn = self.connect()?;
        let form = conn
            .query_row(
                &format!(
                    "UPDATE forms SET content = ?3 WHERE user_id = ?1 AND id = ?2 \
                     RETURNING {FORM_COLUMNS}"
                ),
                params![user_id, id, content],
                form_from_row,
            )
            .optional()?;
        Ok(form)
    }

    /// Marks an owned form as published. The update runs even when the form is
    /// already published.
    pub fn publish_owned_form(&self, user_id: &str, id: i64) -> Result<Option<Form>, StoreError> {
        let conn = self.connect()?;
        let form = conn
            .query_row(
                &format!(
                    "UPDATE forms SET published = 1 WHERE user_id = ?1 AND id = ?2 \
                     RETURNING {FORM_COLUMNS}"
                ),
                params![user_id, id],
                form_from_row,
            )
            .optional()?;
        Ok(form)
    }

    /// Counts one visit on the shared form and returns its content, published or not.
    pub fn record_visit(&self, share_url: &str) -> Result<Option<String>, StoreError> {
        let conn = self.connect()?;
        let content = conn
            .query_row(
                "UPDATE forms SET visits = visits + 1 WHERE share_url = ?1 RETURNING content",
                params![share_url],
                |row| row.get(0),
            )
            .optional()?;
        Ok(content)
    }

    /// An owned form plus its submissions, read from one snapshot.
    pub fn find_owned_form_with_submissions(
        &self,
        user_id: &str,
        id: i64,
    ) -> Result<Option<FormWithSubmissions>, StoreError> {
        self.in_transaction(TransactionBehavior::Deferred, |tx| {
            let form = tx
                .query_row(
                    &format!("SELECT {FORM_COLUMNS} FROM forms WHERE user_id = ?1 AND id = ?2"),
                    params![user_id, id],
                    form_from_row,
                )
                .optional()?;
            let Some(form) = form else {
                return Ok(None);
            };

            let mut stmt = tx.prepare(
                "SELECT s.id, s.form_id, s.content, s.created_at_ms \
                 FROM form_submissions s JOIN forms f ON f.id = s.form_id \
                 WHERE f.user_id = ?1 AND f.id = ?2 \
                 ORDER BY s.created_at_ms ASC, s.id ASC",
            )?;
            let form_submissions = stmt
                .query_map(params![user_id, id], submission_from_row)?
                .collect::<Result<Vec<_>, _>>()?;

            Ok(Some(FormWithSubmissions {
                form,
                form_submissions,
            }))
        })
    }

    /// Summed `(visits, submissions)` across every form `user_id` owns.
    pub fn owner_totals(&self, user_id: &str) -> Result<(i64, i64), StoreError> {
        let conn = self.connect()?;
        let totals = conn.query_row(
            "SELECT COALESCE(SUM(visits), 0), COALESCE(SUM(submissions), 0) \
             FROM forms WHERE user_id = ?1",
            params![user_id],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;
        Ok(totals)
    }
}
