//! HTTP handlers and route configuration.

mod auth;
mod comments;
mod health;
mod posts;
mod users;

use actix_web::web;

use quill_core::domain::{Comment, Post, User};
use quill_shared::dto::{CommentResponse, PostResponse, UserResponse};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            // Auth routes
            .service(
                web::scope("/auth")
                    .route("/register", web::post().to(auth::register))
                    .route("/login", web::post().to(auth::login))
                    .route("/me", web::get().to(auth::me)),
            )
            // Post routes; the literal /id segment is registered before
            // the slug catch-all so it wins the match.
            .service(
                web::scope("/posts")
                    .route("", web::get().to(posts::list))
                    .route("", web::post().to(posts::create))
                    .route("/id/{id}", web::get().to(posts::get_by_id))
                    .route("/{slug}", web::get().to(posts::get_by_slug))
                    .route("/{id}", web::put().to(posts::update))
                    .route("/{id}", web::delete().to(posts::delete)),
            )
            // Comment routes
            .service(
                web::scope("/comments")
                    .route("", web::get().to(comments::list))
                    .route("/{post_id}", web::post().to(comments::create))
                    .route("/{id}", web::get().to(comments::get_by_id))
                    .route("/{id}", web::put().to(comments::update))
                    .route("/{id}", web::delete().to(comments::delete)),
            )
            // Admin routes
            .service(web::scope("/users").route("", web::get().to(users::list))),
    );
}

pub(crate) fn user_response(user: User) -> UserResponse {
    UserResponse {
        id: user.id,
        email: user.email,
        username: user.username,
        role: user.role.as_str().to_string(),
        created_at: user.created_at,
    }
}

pub(crate) fn post_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        author_id: post.author_id,
        title: post.title,
        slug: post.slug,
        content: post.content,
        published: post.published,
        published_at: post.published_at,
        created_at: post.created_at,
        updated_at: post.updated_at,
    }
}

pub(crate) fn comment_response(comment: Comment) -> CommentResponse {
    CommentResponse {
        id: comment.id,
        post_id: comment.post_id,
        name: comment.name,
        email: comment.email,
        content: comment.content,
        published: comment.published,
        created_at: comment.created_at,
    }
}
