use quill_shared::dto::{CreatePostRequest, UpdatePostRequest};

use super::join_errors;
use crate::error::DomainError;

/// Normalized post creation payload.
#[derive(Debug, Clone)]
pub struct CreatePostInput {
    pub title: String,
    pub content: String,
    pub published: bool,
}

/// Normalized partial post update.
#[derive(Debug, Clone, Default)]
pub struct UpdatePostInput {
    pub title: Option<String>,
    pub content: Option<String>,
    pub published: Option<bool>,
}

pub fn validate_post_create(req: &CreatePostRequest) -> Result<CreatePostInput, DomainError> {
    let mut errors = Vec::new();

    let title = req.title.as_deref().map(str::trim).unwrap_or("");
    if title.is_empty() {
        errors.push("Title is required".to_string());
    }

    let content = req.content.as_deref().map(str::trim).unwrap_or("");
    if content.is_empty() {
        errors.push("Content is required".to_string());
    }

    if !errors.is_empty() {
        return Err(join_errors(errors));
    }

    Ok(CreatePostInput {
        title: title.to_string(),
        content: content.to_string(),
        published: req.published.unwrap_or(false),
    })
}

pub fn validate_post_update(req: &UpdatePostRequest) -> Result<UpdatePostInput, DomainError> {
    let mut errors = Vec::new();

    let title = req.title.as_deref().map(str::trim);
    if matches!(title, Some("")) {
        errors.push("Title cannot be empty".to_string());
    }

    let content = req.content.as_deref().map(str::trim);
    if matches!(content, Some("")) {
        errors.push("Content cannot be empty".to_string());
    }

    if !errors.is_empty() {
        return Err(join_errors(errors));
    }

    Ok(UpdatePostInput {
        title: title.map(str::to_owned),
        content: content.map(str::to_owned),
        published: req.published,
    })
}
