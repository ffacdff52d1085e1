use quill_shared::dto::{CreateCommentRequest, UpdateCommentRequest};

use super::{is_email, join_errors, trimmed_or_none};
use crate::error::DomainError;

/// Normalized comment creation payload.
#[derive(Debug, Clone)]
pub struct CreateCommentInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub content: String,
}

/// Normalized partial comment update. For name/email the outer Option is
/// field presence, the inner one the new value ("clear" when blank).
#[derive(Debug, Clone, Default)]
pub struct UpdateCommentInput {
    pub name: Option<Option<String>>,
    pub email: Option<Option<String>>,
    pub content: Option<String>,
    pub published: Option<bool>,
}

pub fn validate_comment_create(
    req: &CreateCommentRequest,
) -> Result<CreateCommentInput, DomainError> {
    let mut errors = Vec::new();

    let content = req.content.as_deref().map(str::trim).unwrap_or("");
    if content.is_empty() {
        errors.push("Comment content is required".to_string());
    }

    if let Some(email) = req.email.as_deref() {
        if !email.is_empty() && !is_email(email) {
            errors.push("Invalid email format".to_string());
        }
    }

    if !errors.is_empty() {
        return Err(join_errors(errors));
    }

    Ok(CreateCommentInput {
        name: trimmed_or_none(req.name.as_deref()),
        email: trimmed_or_none(req.email.as_deref()),
        content: content.to_string(),
    })
}

pub fn validate_comment_update(
    req: &UpdateCommentRequest,
) -> Result<UpdateCommentInput, DomainError> {
    let mut errors = Vec::new();

    let content = req.content.as_deref().map(str::trim);
    if matches!(content, Some("")) {
        errors.push("Content cannot be empty".to_string());
    }

    if let Some(email) = req.email.as_deref() {
        if !email.is_empty() && !is_email(email) {
            errors.push("Invalid email format".to_string());
        }
    }

    if !errors.is_empty() {
        return Err(join_errors(errors));
    }

    Ok(UpdateCommentInput {
        name: req.name.as_deref().map(|name| {
            let name = name.trim();
            (!name.is_empty()).then(|| name.to_string())
        }),
        email: req.email.as_deref().map(|email| {
            let email = email.trim();
            (!email.is_empty()).then(|| email.to_string())
        }),
        content: content.map(str::to_owned),
        published: req.published,
    })
}
