//! Comment handlers.

use actix_web::{HttpResponse, web};

use quill_core::domain::{CommentFilter, Order};
use quill_core::validate::parse_id;
use quill_shared::dto::{
    CreateCommentRequest, DeletedResponse, ListCommentsQuery, UpdateCommentRequest,
};

use super::comment_response;
use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/comments/{post_id} - anonymous comment creation, gated on
/// the post being published.
pub async fn create(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<CreateCommentRequest>,
) -> AppResult<HttpResponse> {
    let post_id = parse_id(&path, "post ID")?;
    let comment = state.comments.create(post_id, &body).await?;
    Ok(HttpResponse::Created().json(comment_response(comment)))
}

/// GET /api/comments - moderation list, newest first.
pub async fn list(
    state: web::Data<AppState>,
    _identity: Identity,
    query: web::Query<ListCommentsQuery>,
) -> AppResult<HttpResponse> {
    let post_id = query
        .post_id
        .as_deref()
        .map(|raw| parse_id(raw, "post ID"))
        .transpose()?;
    let filter = CommentFilter {
        post_id,
        published: query.published,
    };

    let comments = state.comments.list(filter, Order::Desc).await?;
    Ok(HttpResponse::Ok().json(
        comments
            .into_iter()
            .map(comment_response)
            .collect::<Vec<_>>(),
    ))
}

/// GET /api/comments/{id}
pub async fn get_by_id(
    state: web::Data<AppState>,
    _identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path, "comment ID")?;
    let comment = state.comments.get_by_id(id).await?;
    Ok(HttpResponse::Ok().json(comment_response(comment)))
}

/// PUT /api/comments/{id} - post-owner or admin moderation.
pub async fn update(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
    body: web::Json<UpdateCommentRequest>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path, "comment ID")?;
    let comment = state.comments.update(id, &body, &identity.actor()).await?;
    Ok(HttpResponse::Ok().json(comment_response(comment)))
}

/// DELETE /api/comments/{id} - post-owner or admin moderation.
pub async fn delete(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path, "comment ID")?;
    state.comments.delete(id, &identity.actor()).await?;

    Ok(HttpResponse::Ok().json(DeletedResponse {
        ok: true,
        message: "Comment deleted successfully".to_string(),
    }))
}
