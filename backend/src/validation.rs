//! Input schema for new forms.

use crate::error::FormError;
use common::requests::CreateFormRequest;

pub const NAME_MAX_CHARS: usize = 100;
pub const DESCRIPTION_MAX_CHARS: usize = 500;

/// A create request that passed validation, with surrounding whitespace removed.
/// A blank description becomes `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedForm {
    pub name: String,
    pub description: Option<String>,
}

pub fn validate_create(request: &CreateFormRequest) -> Result<ValidatedForm, FormError> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err(FormError::Validation("name is required".to_string()));
    }
    if name.chars().count() > NAME_MAX_CHARS {
        return Err(FormError::Validation(format!(
            "name must be at most {NAME_MAX_CHARS} characters"
        )));
    }

    let description = request
        .description
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty());
    if let Some(description) = description {
        if description.chars().count() > DESCRIPTION_MAX_CHARS {
            return Err(FormError::Validation(format!(
                "description must be at most {DESCRIPTION_MAX_CHARS} characters"
            )));
        }
    }

    Ok(ValidatedForm {
        name: name.to_string(),
        description: description.map(str::to_string),
    })
}
