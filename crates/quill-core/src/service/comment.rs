//! Comment orchestration: creation gating and post-owner moderation.

use std::sync::Arc;

use quill_shared::dto::{CreateCommentRequest, UpdateCommentRequest};

use crate::domain::{Actor, Comment, CommentFilter, CommentPatch, NewComment, Order};
use crate::error::DomainError;
use crate::policy::can_modify;
use crate::ports::{CommentRepository, PostRepository};
use crate::validate::{validate_comment_create, validate_comment_update};

pub struct CommentService {
    comments: Arc<dyn CommentRepository>,
    posts: Arc<dyn PostRepository>,
}

impl CommentService {
    pub fn new(comments: Arc<dyn CommentRepository>, posts: Arc<dyn PostRepository>) -> Self {
        Self { comments, posts }
    }

    /// Anonymous creation, gated on the post being live at this moment.
    /// A draft post reports NotFound, matching the public read path.
    pub async fn create(
        &self,
        post_id: i64,
        req: &CreateCommentRequest,
    ) -> Result<Comment, DomainError> {
        let input = validate_comment_create(req)?;

        let post = self
            .posts
            .find_by_id(post_id)
            .await?
            .ok_or(DomainError::not_found("Post"))?;
        if !post.published {
            return Err(DomainError::not_found("Post"));
        }

        Ok(self
            .comments
            .create(NewComment {
                post_id: post.id,
                name: input.name,
                email: input.email,
                content: input.content,
                published: true,
            })
            .await?)
    }

    /// Filtered listing for authenticated callers; the moderation queue
    /// reads newest first, the admin post view oldest first.
    pub async fn list(
        &self,
        filter: CommentFilter,
        order: Order,
    ) -> Result<Vec<Comment>, DomainError> {
        Ok(self.comments.find_many(filter, order).await?)
    }

    /// Published comments under one post, oldest first (reader view).
    pub async fn list_for_post(&self, post_id: i64) -> Result<Vec<Comment>, DomainError> {
        let filter = CommentFilter {
            post_id: Some(post_id),
            published: Some(true),
        };
        Ok(self.comments.find_many(filter, Order::Asc).await?)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Comment, DomainError> {
        self.comments
            .find_by_id(id)
            .await?
            .ok_or(DomainError::not_found("Comment"))
    }

    pub async fn update(
        &self,
        id: i64,
        req: &UpdateCommentRequest,
        actor: &Actor,
    ) -> Result<Comment, DomainError> {
        let input = validate_comment_update(req)?;
        self.authorize(id, actor).await?;

        let patch = CommentPatch {
            name: input.name,
            email: input.email,
            content: input.content,
            published: input.published,
        };
        Ok(self.comments.update(id, patch).await?)
    }

    pub async fn delete(&self, id: i64, actor: &Actor) -> Result<(), DomainError> {
        let comment = self.authorize(id, actor).await?;
        Ok(self.comments.delete(comment.id).await?)
    }

    /// Existence first, then ownership. Moderation rights flow from the
    /// author of the post the comment sits under, not from the commenter
    /// (who has no account).
    async fn authorize(&self, id: i64, actor: &Actor) -> Result<Comment, DomainError> {
        let comment = self
            .comments
            .find_by_id(id)
            .await?
            .ok_or(DomainError::not_found("Comment"))?;
        let post = self
            .posts
            .find_by_id(comment.post_id)
            .await?
            .ok_or(DomainError::not_found("Post"))?;
        if !can_modify(actor, post.author_id) {
            return Err(DomainError::Forbidden);
        }
        Ok(comment)
    }
}
