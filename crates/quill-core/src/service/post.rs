//! Post orchestration: slug assignment, publish state, ownership checks.

use std::sync::Arc;

use chrono::Utc;
use quill_shared::dto::{CreatePostRequest, UpdatePostRequest};

use crate::domain::{Actor, NewPost, Order, Page, PageRequest, Post, PostFilter, PostPatch};
use crate::error::{DomainError, RepoError};
use crate::policy::can_modify;
use crate::ports::PostRepository;
use crate::slug::slugify;
use crate::validate::{validate_post_create, validate_post_update};

pub struct PostService {
    posts: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    /// Newest-first listing; `filter.published` trims drafts for the public.
    pub async fn list(
        &self,
        filter: PostFilter,
        page: PageRequest,
    ) -> Result<Page<Post>, DomainError> {
        let items = self.posts.find_many(filter, page, Order::Desc).await?;
        let total = self.posts.count(filter).await?;
        Ok(Page {
            items,
            page: page.page,
            per_page: page.per_page,
            total,
        })
    }

    /// Admin-panel fetch. Existence is checked before ownership, so a
    /// missing post is 404 and someone else's draft is 403.
    pub async fn get_by_id(&self, id: i64, actor: &Actor) -> Result<Post, DomainError> {
        let post = self.find_existing(id).await?;
        if !post.published && !can_modify(actor, post.author_id) {
            return Err(DomainError::Forbidden);
        }
        Ok(post)
    }

    /// Public fetch; an unpublished post is indistinguishable from a
    /// missing one.
    pub async fn get_by_slug(&self, slug: &str) -> Result<Post, DomainError> {
        match self.posts.find_by_slug(slug).await? {
            Some(post) if post.published => Ok(post),
            _ => Err(DomainError::not_found("Post")),
        }
    }

    pub async fn create(
        &self,
        req: &CreatePostRequest,
        author_id: i64,
    ) -> Result<Post, DomainError> {
        let input = validate_post_create(req)?;

        let base = slugify(&input.title);
        if base.is_empty() {
            return Err(DomainError::Validation(
                "Title must contain valid characters".to_string(),
            ));
        }
        let slug = self.unique_slug(&base).await?;

        let published_at = input.published.then(Utc::now);
        self.posts
            .create(NewPost {
                author_id,
                title: input.title,
                slug,
                content: input.content,
                published: input.published,
                published_at,
            })
            .await
            .map_err(slug_conflict)
    }

    pub async fn update(
        &self,
        id: i64,
        req: &UpdatePostRequest,
        actor: &Actor,
    ) -> Result<Post, DomainError> {
        let input = validate_post_update(req)?;

        let post = self.find_existing(id).await?;
        if !can_modify(actor, post.author_id) {
            return Err(DomainError::Forbidden);
        }

        let mut patch = PostPatch::default();

        if let Some(title) = input.title {
            // A renamed post gets a fresh unique slug; the old slug is
            // not reused even if it frees up later.
            let base = slugify(&title);
            if !base.is_empty() && base != post.slug {
                patch.slug = Some(self.unique_slug(&base).await?);
            }
            patch.title = Some(title);
        }

        if let Some(content) = input.content {
            patch.content = Some(content);
        }

        if let Some(published) = input.published {
            patch.published = Some(published);
            // Stamped exactly once; unpublishing never clears it.
            if published && post.published_at.is_none() {
                patch.published_at = Some(Utc::now());
            }
        }

        self.posts.update(id, patch).await.map_err(slug_conflict)
    }

    pub async fn delete(&self, id: i64, actor: &Actor) -> Result<(), DomainError> {
        let post = self.find_existing(id).await?;
        if !can_modify(actor, post.author_id) {
            return Err(DomainError::Forbidden);
        }
        Ok(self.posts.delete(post.id).await?)
    }

    async fn find_existing(&self, id: i64) -> Result<Post, DomainError> {
        self.posts
            .find_by_id(id)
            .await?
            .ok_or(DomainError::not_found("Post"))
    }

    /// Probe `base`, `base-1`, `base-2`, ... until a free slug turns up.
    /// Unbounded by design of the source system; two racing writers can
    /// still pick the same candidate, which the store's unique index
    /// rejects and [`slug_conflict`] reports as Conflict.
    async fn unique_slug(&self, base: &str) -> Result<String, DomainError> {
        let mut candidate = base.to_string();
        let mut counter = 1u64;
        loop {
            if self.posts.find_by_slug(&candidate).await?.is_none() {
                return Ok(candidate);
            }
            candidate = format!("{base}-{counter}");
            counter += 1;
        }
    }
}

fn slug_conflict(err: RepoError) -> DomainError {
    match err {
        RepoError::Constraint(_) => DomainError::Conflict("Slug already exists".to_string()),
        other => other.into(),
    }
}
