//! # Form Lifecycle Service
//!
//! The operations behind the HTTP API. Owner-scoped operations take the
//! caller's principal explicitly and fail with `AuthenticationRequired` when
//! there is none; the two share-URL operations are public.
//!
//! Every owner-scoped call is a single store statement filtered by both the
//! principal's id and the form id, so a form owned by somebody else looks
//! exactly like a form that does not exist.
//!
//! All methods block on SQLite. HTTP handlers call them through
//! `services::run_blocking`.

use crate::error::FormError;
use crate::identity::Principal;
use crate::store::{FormStore, NewForm, SubmitOutcome};
use crate::validation::validate_create;
use common::model::form::{Form, FormSubmission, FormWithSubmissions};
use common::model::stats::FormStats;
use common::requests::CreateFormRequest;
use log::{info, warn};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct FormService {
    store: FormStore,
}

fn require(principal: Option<&Principal>) -> Result<&Principal, FormError> {
    principal.ok_or_else(|| {
        warn!("rejected anonymous call to an owner-scoped operation");
        FormError::AuthenticationRequired
    })
}

impl FormService {
    pub fn new(store: FormStore) -> Self {
        Self { store }
    }

    /// Validates the request and stores a new empty, unpublished form with a
    /// fresh share URL. Returns the new form's id.
    pub fn create_form(
        &self,
        principal: Option<&Principal>,
        request: &CreateFormRequest,
    ) -> Result<i64, FormError> {
        let valid = validate_create(request)?;
        let principal = require(principal)?;

        let share_url = Uuid::new_v4().to_string();
        let form = self.store.insert_form(&NewForm {
            user_id: &principal.id,
            name: &valid.name,
            description: valid.description.as_deref(),
            share_url: &share_url,
        })?;

        info!("form {} created by {}", form.id, principal.id);
        Ok(form.id)
    }

    /// Every form the principal owns, newest first.
    pub fn list_forms(&self, principal: Option<&Principal>) -> Result<Vec<Form>, FormError> {
        let principal = require(principal)?;
        Ok(self.store.list_forms(&principal.id)?)
    }

    pub fn get_form_by_id(
        &self,
        principal: Option<&Principal>,
        id: i64,
    ) -> Result<Option<Form>, FormError> {
        let principal = require(principal)?;
        Ok(self.store.find_owned_form(&principal.id, id)?)
    }

    /// Replaces the stored layout. The content is not inspected.
    pub fn update_form_content(
        &self,
        principal: Option<&Principal>,
        id: i64,
        content: &str,
    ) -> Result<Form, FormError> {
        let principal = require(principal)?;
        self.store
            .update_owned_content(&principal.id, id, content)?
            .ok_or(FormError::NotFound)
    }

    pub fn publish_form(&self, principal: Option<&Principal>, id: i64) -> Result<Form, FormError> {
        let principal = require(principal)?;
        let form = self
            .store
            .publish_owned_form(&principal.id, id)?
            .ok_or(FormError::NotFound)?;
        info!("form {} published by {}", form.id, principal.id);
        Ok(form)
    }

    /// Public. Counts a visit and returns the layout, whether or not the form
    /// is published.
    pub fn get_form_content_by_share_url(&self, share_url: &str) -> Result<String, FormError> {
        self.store
            .record_visit(share_url)?
            .ok_or(FormError::NotFound)
    }

    /// Public. Stores a response and bumps the submission counter in one
    /// transaction, only while the form is published.
    pub fn submit_form(&self, share_url: &str, content: &str) -> Result<FormSubmission, FormError> {
        match self.store.submit(share_url, content)? {
            SubmitOutcome::Accepted(submission) => {
                info!(
                    "submission {} recorded for form {}",
                    submission.id, submission.form_id
                );
                Ok(submission)
            }
            SubmitOutcome::NotPublished => {
                warn!("submission rejected: form behind {share_url} is not published");
                Err(FormError::NotPublished)
            }
            SubmitOutcome::NotFound => {
                warn!("submission rejected: no form behind {share_url}");
                Err(FormError::NotFound)
            }
        }
    }

    pub fn get_form_with_submissions(
        &self,
        principal: Option<&Principal>,
        id: i64,
    ) -> Result<Option<FormWithSubmissions>, FormError> {
        let principal = require(principal)?;
        Ok(self
            .store
            .find_owned_form_with_submissions(&principal.id, id)?)
    }

    /// Visit and submission totals across the principal's forms, with derived rates.
    pub fn get_form_stats(&self, principal: Option<&Principal>) -> Result<FormStats, FormError> {
        let principal = require(principal)?;
        let (visits, submissions) = self.store.owner_totals(&principal.id)?;
        Ok(FormStats::from_totals(visits, submissions))
    }
}
