//! In-memory repositories - the fallback store when no database is
//! configured, and the store service tests run against.
//!
//! Email and slug uniqueness are enforced here with
//! [`RepoError::Constraint`], mirroring the database's unique indexes, so
//! this store remains the final arbiter of slug races in tests too.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use quill_core::domain::{
    Comment, CommentFilter, CommentPatch, NewComment, NewPost, NewUser, Order, PageRequest, Post,
    PostFilter, PostPatch, User,
};
use quill_core::error::RepoError;
use quill_core::ports::{CommentRepository, PostRepository, UserRepository};

/// User rows in process memory.
#[derive(Default)]
pub struct InMemoryUserRepository {
    rows: RwLock<Vec<User>>,
    next_id: AtomicI64,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst) + 1
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, RepoError> {
        Ok(self.rows.read().await.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, RepoError> {
        Ok(self.rows.read().await.clone())
    }

    async fn create(&self, new_user: NewUser) -> Result<User, RepoError> {
        let mut rows = self.rows.write().await;
        if rows.iter().any(|u| u.email == new_user.email) {
            return Err(RepoError::Constraint(format!(
                "duplicate key value: users.email = {}",
                new_user.email
            )));
        }

        let user = User {
            id: self.next_id(),
            email: new_user.email,
            username: new_user.username,
            password_hash: new_user.password_hash,
            role: new_user.role,
            created_at: Utc::now(),
        };
        rows.push(user.clone());
        Ok(user)
    }
}

/// Post rows in process memory.
#[derive(Default)]
pub struct InMemoryPostRepository {
    rows: RwLock<Vec<Post>>,
    next_id: AtomicI64,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn matches(filter: PostFilter, post: &Post) -> bool {
        filter.published.is_none_or(|p| post.published == p)
            && filter.author_id.is_none_or(|a| post.author_id == a)
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        Ok(self.rows.read().await.iter().find(|p| p.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .find(|p| p.slug == slug)
            .cloned())
    }

    async fn find_many(
        &self,
        filter: PostFilter,
        page: PageRequest,
        order: Order,
    ) -> Result<Vec<Post>, RepoError> {
        let rows = self.rows.read().await;
        let mut items: Vec<Post> = rows
            .iter()
            .filter(|p| Self::matches(filter, p))
            .cloned()
            .collect();

        // Ties on created_at break by id so ordering stays deterministic.
        items.sort_by_key(|p| (p.created_at, p.id));
        if order == Order::Desc {
            items.reverse();
        }

        let start = (page.offset() as usize).min(items.len());
        let end = (start + page.per_page as usize).min(items.len());
        Ok(items[start..end].to_vec())
    }

    async fn count(&self, filter: PostFilter) -> Result<u64, RepoError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().filter(|p| Self::matches(filter, p)).count() as u64)
    }

    async fn create(&self, new_post: NewPost) -> Result<Post, RepoError> {
        let mut rows = self.rows.write().await;
        if rows.iter().any(|p| p.slug == new_post.slug) {
            return Err(RepoError::Constraint(format!(
                "duplicate key value: posts.slug = {}",
                new_post.slug
            )));
        }

        let now = Utc::now();
        let post = Post {
            id: self.next_id(),
            author_id: new_post.author_id,
            title: new_post.title,
            slug: new_post.slug,
            content: new_post.content,
            published: new_post.published,
            published_at: new_post.published_at,
            created_at: now,
            updated_at: now,
        };
        rows.push(post.clone());
        Ok(post)
    }

    async fn update(&self, id: i64, patch: PostPatch) -> Result<Post, RepoError> {
        let mut rows = self.rows.write().await;

        if let Some(slug) = patch.slug.as_deref() {
            if rows.iter().any(|p| p.slug == slug && p.id != id) {
                return Err(RepoError::Constraint(format!(
                    "duplicate key value: posts.slug = {slug}"
                )));
            }
        }

        let post = rows
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RepoError::NotFound)?;

        if let Some(title) = patch.title {
            post.title = title;
        }
        if let Some(slug) = patch.slug {
            post.slug = slug;
        }
        if let Some(content) = patch.content {
            post.content = content;
        }
        if let Some(published) = patch.published {
            post.published = published;
        }
        if let Some(published_at) = patch.published_at {
            post.published_at = Some(published_at);
        }
        post.updated_at = Utc::now();

        Ok(post.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|p| p.id != id);
        if rows.len() == before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

/// Comment rows in process memory.
#[derive(Default)]
pub struct InMemoryCommentRepository {
    rows: RwLock<Vec<Comment>>,
    next_id: AtomicI64,
}

impl InMemoryCommentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn matches(filter: CommentFilter, comment: &Comment) -> bool {
        filter.post_id.is_none_or(|p| comment.post_id == p)
            && filter.published.is_none_or(|p| comment.published == p)
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Comment>, RepoError> {
        Ok(self.rows.read().await.iter().find(|c| c.id == id).cloned())
    }

    async fn find_many(
        &self,
        filter: CommentFilter,
        order: Order,
    ) -> Result<Vec<Comment>, RepoError> {
        let rows = self.rows.read().await;
        let mut items: Vec<Comment> = rows
            .iter()
            .filter(|c| Self::matches(filter, c))
            .cloned()
            .collect();

        items.sort_by_key(|c| (c.created_at, c.id));
        if order == Order::Desc {
            items.reverse();
        }
        Ok(items)
    }

    async fn create(&self, new_comment: NewComment) -> Result<Comment, RepoError> {
        let mut rows = self.rows.write().await;
        let comment = Comment {
            id: self.next_id(),
            post_id: new_comment.post_id,
            name: new_comment.name,
            email: new_comment.email,
            content: new_comment.content,
            published: new_comment.published,
            created_at: Utc::now(),
        };
        rows.push(comment.clone());
        Ok(comment)
    }

    async fn update(&self, id: i64, patch: CommentPatch) -> Result<Comment, RepoError> {
        let mut rows = self.rows.write().await;
        let comment = rows
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(RepoError::NotFound)?;

        if let Some(name) = patch.name {
            comment.name = name;
        }
        if let Some(email) = patch.email {
            comment.email = email;
        }
        if let Some(content) = patch.content {
            comment.content = content;
        }
        if let Some(published) = patch.published {
            comment.published = published;
        }

        Ok(comment.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|c| c.id != id);
        if rows.len() == before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_post(slug: &str, published: bool) -> NewPost {
        NewPost {
            author_id: 1,
            title: slug.to_string(),
            slug: slug.to_string(),
            content: "content".to_string(),
            published,
            published_at: None,
        }
    }

    #[tokio::test]
    async fn duplicate_slug_is_a_constraint_violation() {
        let repo = InMemoryPostRepository::new();
        repo.create(new_post("taken", true)).await.unwrap();

        let err = repo.create(new_post("taken", true)).await.unwrap_err();
        assert!(matches!(err, RepoError::Constraint(_)));
        assert_eq!(repo.count(PostFilter::default()).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn updating_to_a_taken_slug_is_a_constraint_violation() {
        let repo = InMemoryPostRepository::new();
        repo.create(new_post("first", true)).await.unwrap();
        let second = repo.create(new_post("second", true)).await.unwrap();

        let err = repo
            .update(
                second.id,
                PostPatch {
                    slug: Some("first".to_string()),
                    ..PostPatch::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::Constraint(_)));

        // Re-setting its own slug is not a collision.
        repo.update(
            second.id,
            PostPatch {
                slug: Some("second".to_string()),
                ..PostPatch::default()
            },
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn duplicate_email_is_a_constraint_violation() {
        let repo = InMemoryUserRepository::new();
        repo.create(NewUser {
            email: "a@b.com".to_string(),
            username: None,
            password_hash: "hash".to_string(),
            role: quill_core::domain::Role::Author,
        })
        .await
        .unwrap();

        let err = repo
            .create(NewUser {
                email: "a@b.com".to_string(),
                username: Some("other".to_string()),
                password_hash: "hash2".to_string(),
                role: quill_core::domain::Role::Author,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::Constraint(_)));
    }

    #[tokio::test]
    async fn find_many_filters_orders_and_paginates() {
        let repo = InMemoryPostRepository::new();
        for i in 0..5 {
            repo.create(new_post(&format!("p{i}"), i % 2 == 0))
                .await
                .unwrap();
        }

        let published = repo
            .find_many(
                PostFilter::published_only(),
                PageRequest::default(),
                Order::Asc,
            )
            .await
            .unwrap();
        assert_eq!(
            published.iter().map(|p| p.slug.as_str()).collect::<Vec<_>>(),
            ["p0", "p2", "p4"]
        );

        let newest_two = repo
            .find_many(
                PostFilter::default(),
                PageRequest::new(Some(1), Some(2)),
                Order::Desc,
            )
            .await
            .unwrap();
        assert_eq!(
            newest_two.iter().map(|p| p.slug.as_str()).collect::<Vec<_>>(),
            ["p4", "p3"]
        );

        let last_page = repo
            .find_many(
                PostFilter::default(),
                PageRequest::new(Some(3), Some(2)),
                Order::Desc,
            )
            .await
            .unwrap();
        assert_eq!(last_page.len(), 1);
    }

    #[tokio::test]
    async fn missing_rows_surface_not_found() {
        let posts = InMemoryPostRepository::new();
        assert!(matches!(
            posts.delete(1).await.unwrap_err(),
            RepoError::NotFound
        ));
        assert!(matches!(
            posts.update(1, PostPatch::default()).await.unwrap_err(),
            RepoError::NotFound
        ));

        let comments = InMemoryCommentRepository::new();
        assert!(matches!(
            comments.delete(1).await.unwrap_err(),
            RepoError::NotFound
        ));
    }
}
