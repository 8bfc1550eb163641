use serde::{Deserialize, Serialize};

/// Payload for `POST /api/forms`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFormRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Payload for `PUT /api/forms/{id}/content`. The content is stored verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateFormContentRequest {
    pub content: String,
}

/// Payload for `POST /api/share/{share_url}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitFormRequest {
    pub content: String,
}
