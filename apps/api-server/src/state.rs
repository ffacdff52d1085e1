//! Application state - the services every handler shares.

use std::sync::Arc;

use quill_core::ports::{
    CommentRepository, PasswordService, PostRepository, TokenService, UserRepository,
};
use quill_core::service::{AuthService, CommentService, PostService, UserService};
use quill_infra::database::memory::{
    InMemoryCommentRepository, InMemoryPostRepository, InMemoryUserRepository,
};
use quill_infra::database::postgres::{
    PostgresCommentRepository, PostgresPostRepository, PostgresUserRepository,
};
use quill_infra::{Argon2PasswordService, DatabaseConfig, connect};

type Repositories = (
    Arc<dyn UserRepository>,
    Arc<dyn PostRepository>,
    Arc<dyn CommentRepository>,
);

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub posts: Arc<PostService>,
    pub comments: Arc<CommentService>,
    pub users: Arc<UserService>,
}

impl AppState {
    /// Wire the services against Postgres when configured, or the
    /// in-memory store otherwise (data is lost on restart).
    pub async fn new(db_config: Option<&DatabaseConfig>, tokens: Arc<dyn TokenService>) -> Self {
        let (user_repo, post_repo, comment_repo) = match db_config {
            Some(config) => match connect(config).await {
                Ok(db) => (
                    Arc::new(PostgresUserRepository::new(db.clone())) as Arc<dyn UserRepository>,
                    Arc::new(PostgresPostRepository::new(db.clone())) as Arc<dyn PostRepository>,
                    Arc::new(PostgresCommentRepository::new(db)) as Arc<dyn CommentRepository>,
                ),
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {e}. Using the in-memory store."
                    );
                    Self::memory_repos()
                }
            },
            None => {
                tracing::warn!("DATABASE_URL not set. Running with the in-memory store.");
                Self::memory_repos()
            }
        };

        let passwords: Arc<dyn PasswordService> = Arc::new(Argon2PasswordService::new());

        tracing::info!("Application state initialized");

        Self {
            auth: Arc::new(AuthService::new(user_repo.clone(), passwords, tokens)),
            posts: Arc::new(PostService::new(post_repo.clone())),
            comments: Arc::new(CommentService::new(comment_repo, post_repo)),
            users: Arc::new(UserService::new(user_repo)),
        }
    }

    fn memory_repos() -> Repositories {
        (
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemoryPostRepository::new()),
            Arc::new(InMemoryCommentRepository::new()),
        )
    }
}
