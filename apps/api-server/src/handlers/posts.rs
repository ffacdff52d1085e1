//! Post handlers.

use actix_web::{HttpResponse, web};

use quill_core::domain::{CommentFilter, Order, PageRequest, PostFilter};
use quill_core::validate::parse_id;
use quill_shared::dto::{
    CreatePostRequest, DeletedResponse, ListPostsQuery, Pagination, PostDetailResponse,
    PostListResponse, UpdatePostRequest,
};

use super::{comment_response, post_response};
use crate::middleware::auth::{Identity, OptionalIdentity};
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/posts - public list. Anonymous callers only see published
/// posts; an authenticated caller may pass `published=false` for drafts.
pub async fn list(
    state: web::Data<AppState>,
    identity: OptionalIdentity,
    query: web::Query<ListPostsQuery>,
) -> AppResult<HttpResponse> {
    let published_only = identity.0.is_none() || query.published != Some(false);
    let filter = if published_only {
        PostFilter::published_only()
    } else {
        PostFilter::default()
    };
    let page = PageRequest::new(query.page, query.limit);

    let result = state.posts.list(filter, page).await?;
    Ok(HttpResponse::Ok().json(PostListResponse {
        pagination: Pagination {
            page: result.page,
            limit: result.per_page,
            total: result.total,
            pages: result.pages(),
        },
        posts: result.items.into_iter().map(post_response).collect(),
    }))
}

/// GET /api/posts/id/{id} - admin-panel fetch, drafts included for the
/// owner; every comment attached, oldest first.
pub async fn get_by_id(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path, "post ID")?;
    let post = state.posts.get_by_id(id, &identity.actor()).await?;
    let comments = state
        .comments
        .list(
            CommentFilter {
                post_id: Some(post.id),
                published: None,
            },
            Order::Asc,
        )
        .await?;

    Ok(HttpResponse::Ok().json(PostDetailResponse {
        post: post_response(post),
        comments: comments.into_iter().map(comment_response).collect(),
    }))
}

/// GET /api/posts/{slug} - public fetch with its published comments.
pub async fn get_by_slug(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post = state.posts.get_by_slug(&path).await?;
    let comments = state.comments.list_for_post(post.id).await?;

    Ok(HttpResponse::Ok().json(PostDetailResponse {
        post: post_response(post),
        comments: comments.into_iter().map(comment_response).collect(),
    }))
}

/// POST /api/posts
pub async fn create(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let post = state.posts.create(&body, identity.user_id).await?;
    Ok(HttpResponse::Created().json(post_response(post)))
}

/// PUT /api/posts/{id}
pub async fn update(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path, "post ID")?;
    let post = state.posts.update(id, &body, &identity.actor()).await?;
    Ok(HttpResponse::Ok().json(post_response(post)))
}

/// DELETE /api/posts/{id}
pub async fn delete(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path, "post ID")?;
    state.posts.delete(id, &identity.actor()).await?;

    Ok(HttpResponse::Ok().json(DeletedResponse {
        ok: true,
        message: "Post deleted successfully".to_string(),
    }))
}
