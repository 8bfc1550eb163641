use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A form owned by a single user.
///
/// Forms are created empty and unpublished. The owner edits `content` (the
/// serialized field layout produced by the builder) and eventually publishes
/// the form, after which anonymous visitors holding the `share_url` can
/// submit responses.
///
/// `visits` and `submissions` are independent counters maintained by the
/// public share endpoints; `submissions` may exceed `visits`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Form {
    /// Store-assigned identifier.
    pub id: i64,
    /// Identifier of the owning principal. Never changes after creation.
    pub user_id: String,
    pub name: String,
    pub description: Option<String>,
    /// Opaque serialized layout. Empty until the owner saves the builder.
    pub content: String,
    pub published: bool,
    /// Public token routing anonymous traffic to this form. Unique across all forms.
    pub share_url: String,
    pub visits: i64,
    pub submissions: i64,
    pub created_at: DateTime<Utc>,
}

/// A single response collected through a form's share URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSubmission {
    pub id: i64,
    pub form_id: i64,
    /// Opaque serialized response payload.
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// A form together with every submission it has received, oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormWithSubmissions {
    #[serde(flatten)]
    pub form: Form,
    pub form_submissions: Vec<FormSubmission>,
}

/// Response body of the create endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedForm {
    pub id: i64,
}

/// Response body of the public content endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedFormContent {
    pub content: String,
}
