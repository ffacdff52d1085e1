use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Comment entity. Commenters are anonymous; moderation rights belong to
/// the author of the post the comment hangs off.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
    pub content: String,
    pub published: bool,
    pub created_at: DateTime<Utc>,
}

/// Insert shape for a comment.
#[derive(Debug, Clone)]
pub struct NewComment {
    pub post_id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
    pub content: String,
    pub published: bool,
}

/// Partial update. The nested Option distinguishes "leave unchanged"
/// (outer `None`) from "clear the field" (inner `None`).
#[derive(Debug, Clone, Default)]
pub struct CommentPatch {
    pub name: Option<Option<String>>,
    pub email: Option<Option<String>>,
    pub content: Option<String>,
    pub published: Option<bool>,
}

/// Row filter for comment queries.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommentFilter {
    pub post_id: Option<i64>,
    pub published: Option<bool>,
}
