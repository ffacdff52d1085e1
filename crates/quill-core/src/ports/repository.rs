use async_trait::async_trait;

use crate::domain::{
    Comment, CommentFilter, CommentPatch, NewComment, NewPost, NewUser, Order, PageRequest, Post,
    PostFilter, PostPatch, User,
};
use crate::error::RepoError;

/// User rows. Accounts are immutable after creation, so there is no
/// update surface here.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, RepoError>;

    /// Lookup by the unique (lowercased) email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;

    async fn find_all(&self) -> Result<Vec<User>, RepoError>;

    /// Fails with [`RepoError::Constraint`] when the email is taken.
    async fn create(&self, user: NewUser) -> Result<User, RepoError>;
}

/// Post rows.
#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError>;

    /// Lookup by the unique slug.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError>;

    async fn find_many(
        &self,
        filter: PostFilter,
        page: PageRequest,
        order: Order,
    ) -> Result<Vec<Post>, RepoError>;

    async fn count(&self, filter: PostFilter) -> Result<u64, RepoError>;

    /// Fails with [`RepoError::Constraint`] when the slug is taken; the
    /// store's unique index is the final arbiter of slug races.
    async fn create(&self, post: NewPost) -> Result<Post, RepoError>;

    /// Fails with [`RepoError::NotFound`] when the row is gone, or
    /// [`RepoError::Constraint`] when a patched slug collides.
    async fn update(&self, id: i64, patch: PostPatch) -> Result<Post, RepoError>;

    async fn delete(&self, id: i64) -> Result<(), RepoError>;
}

/// Comment rows.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Comment>, RepoError>;

    async fn find_many(
        &self,
        filter: CommentFilter,
        order: Order,
    ) -> Result<Vec<Comment>, RepoError>;

    async fn create(&self, comment: NewComment) -> Result<Comment, RepoError>;

    async fn update(&self, id: i64, patch: CommentPatch) -> Result<Comment, RepoError>;

    async fn delete(&self, id: i64) -> Result<(), RepoError>;
}
