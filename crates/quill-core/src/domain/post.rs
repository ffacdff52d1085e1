use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post entity. The slug is unique across all posts and derived from the
/// title; it only changes when an update changes the title.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub author_id: i64,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub published: bool,
    /// Stamped on the first transition into the published state and never
    /// cleared, so unpublish/republish keeps the original publish date.
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert shape for a post; the service supplies slug and publish stamp.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub author_id: i64,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
}

/// Partial update; `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct PostPatch {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub content: Option<String>,
    pub published: Option<bool>,
    pub published_at: Option<DateTime<Utc>>,
}

/// Row filter for list queries.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostFilter {
    pub published: Option<bool>,
    pub author_id: Option<i64>,
}

impl PostFilter {
    /// What anonymous readers get to see.
    pub fn published_only() -> Self {
        Self {
            published: Some(true),
            ..Self::default()
        }
    }
}
