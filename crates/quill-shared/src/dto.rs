//! Data Transfer Objects - request/response types for the API.
//!
//! Fields the validators must be able to report as "required" are `Option`
//! here, so a missing JSON key reaches the validator instead of dying in
//! deserialization with a framework error.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request to register a new account.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Request to login.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Request to create a post.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub published: Option<bool>,
}

/// Partial post update; absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub published: Option<bool>,
}

/// Request to create a comment. Commenters are anonymous; name and email
/// are whatever they choose to leave behind.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateCommentRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub content: Option<String>,
}

/// Partial comment update; a blank name/email clears the field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCommentRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub content: Option<String>,
    pub published: Option<bool>,
}

/// Query parameters for the post list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListPostsQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub published: Option<bool>,
}

/// Query parameters for the moderation comment list. The id stays a raw
/// string so it goes through the same numeric-id validation as path ids.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListCommentsQuery {
    pub post_id: Option<String>,
    pub published: Option<bool>,
}

/// A user's public information; password hashes never leave the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub username: Option<String>,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

/// Successful registration or login: the bearer token plus its owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserResponse,
}

/// A post as the API serves it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: i64,
    pub author_id: i64,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A comment as the API serves it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentResponse {
    pub id: i64,
    pub post_id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
    pub content: String,
    pub published: bool,
    pub created_at: DateTime<Utc>,
}

/// A single post plus its comments, as the detail endpoints serve it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDetailResponse {
    #[serde(flatten)]
    pub post: PostResponse,
    pub comments: Vec<CommentResponse>,
}

/// Paging block attached to list responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub pages: u64,
}

/// One page of posts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostListResponse {
    pub posts: Vec<PostResponse>,
    pub pagination: Pagination,
}

/// Acknowledgement body for deletions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletedResponse {
    pub ok: bool,
    pub message: String,
}
