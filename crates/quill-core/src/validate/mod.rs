//! Input validation - pure functions turning raw request payloads into
//! normalized per-operation inputs, or a single [`DomainError::Validation`]
//! listing every violated rule.

mod auth;
mod comment;
mod post;

pub use auth::{LoginInput, RegisterInput, validate_login, validate_register};
pub use comment::{
    CreateCommentInput, UpdateCommentInput, validate_comment_create, validate_comment_update,
};
pub use post::{CreatePostInput, UpdatePostInput, validate_post_create, validate_post_update};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::DomainError;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

pub(crate) fn is_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

pub(crate) fn join_errors(errors: Vec<String>) -> DomainError {
    DomainError::Validation(errors.join(", "))
}

/// Trimmed copy of an optional field; `None` when absent or blank.
pub(crate) fn trimmed_or_none(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

/// Parse a path or query id. Anything that does not parse as a number is
/// rejected with a message naming the offending field.
pub fn parse_id(raw: &str, field: &str) -> Result<i64, DomainError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| DomainError::Validation(format!("Invalid {field}")))
}
