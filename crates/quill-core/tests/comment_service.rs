use std::sync::Arc;

use quill_core::domain::{Actor, CommentFilter, NewPost, Order, Role};
use quill_core::error::DomainError;
use quill_core::ports::PostRepository;
use quill_core::service::CommentService;
use quill_infra::database::memory::{InMemoryCommentRepository, InMemoryPostRepository};
use quill_shared::dto::{CreateCommentRequest, UpdateCommentRequest};

const POST_AUTHOR: Actor = Actor {
    id: 1,
    role: Role::Author,
};
const OTHER_AUTHOR: Actor = Actor {
    id: 2,
    role: Role::Author,
};
const ADMIN: Actor = Actor {
    id: 99,
    role: Role::Admin,
};

fn service() -> (CommentService, Arc<InMemoryPostRepository>) {
    let posts = Arc::new(InMemoryPostRepository::new());
    let comments = Arc::new(InMemoryCommentRepository::new());
    (CommentService::new(comments, posts.clone()), posts)
}

async fn seed_post(posts: &InMemoryPostRepository, slug: &str, published: bool) -> i64 {
    posts
        .create(NewPost {
            author_id: POST_AUTHOR.id,
            title: slug.to_string(),
            slug: slug.to_string(),
            content: "content".to_string(),
            published,
            published_at: None,
        })
        .await
        .unwrap()
        .id
}

fn comment_request(content: &str) -> CreateCommentRequest {
    CreateCommentRequest {
        name: None,
        email: None,
        content: Some(content.to_string()),
    }
}

#[tokio::test]
async fn create_trims_content_and_auto_publishes() {
    let (service, posts) = service();
    let post_id = seed_post(&posts, "live", true).await;

    let comment = service
        .create(post_id, &comment_request("  hi  "))
        .await
        .unwrap();

    assert_eq!(comment.content, "hi");
    assert_eq!(comment.post_id, post_id);
    assert!(comment.published);
}

#[tokio::test]
async fn create_against_draft_or_missing_post_fails() {
    let (service, posts) = service();
    let draft_id = seed_post(&posts, "draft", false).await;

    let err = service
        .create(draft_id, &comment_request("hi"))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));

    let err = service
        .create(9999, &comment_request("hi"))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));

    // Nothing was written either way.
    assert!(
        service
            .list(CommentFilter::default(), Order::Desc)
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn moderation_rights_come_from_the_posts_author() {
    let (service, posts) = service();
    let post_id = seed_post(&posts, "live", true).await;
    let comment = service
        .create(post_id, &comment_request("first!"))
        .await
        .unwrap();

    let hide = UpdateCommentRequest {
        name: None,
        email: None,
        content: None,
        published: Some(false),
    };

    let err = service
        .update(comment.id, &hide, &OTHER_AUTHOR)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Forbidden));

    let hidden = service.update(comment.id, &hide, &POST_AUTHOR).await.unwrap();
    assert!(!hidden.published);

    service.delete(comment.id, &ADMIN).await.unwrap();
    let err = service.get_by_id(comment.id).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}

#[tokio::test]
async fn missing_comment_is_not_found_before_ownership() {
    let (service, _) = service();
    let err = service.delete(123, &OTHER_AUTHOR).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}

#[tokio::test]
async fn update_clears_and_keeps_optional_fields() {
    let (service, posts) = service();
    let post_id = seed_post(&posts, "live", true).await;
    let comment = service
        .create(
            post_id,
            &CreateCommentRequest {
                name: Some("Ada".to_string()),
                email: Some("ada@example.com".to_string()),
                content: Some("hello".to_string()),
            },
        )
        .await
        .unwrap();

    // Absent name -> unchanged; blank email -> cleared.
    let updated = service
        .update(
            comment.id,
            &UpdateCommentRequest {
                name: None,
                email: Some("".to_string()),
                content: Some("edited".to_string()),
                published: None,
            },
            &POST_AUTHOR,
        )
        .await
        .unwrap();

    assert_eq!(updated.name.as_deref(), Some("Ada"));
    assert_eq!(updated.email, None);
    assert_eq!(updated.content, "edited");
}

#[tokio::test]
async fn reader_view_lists_published_oldest_first() {
    let (service, posts) = service();
    let post_id = seed_post(&posts, "live", true).await;
    let other_post = seed_post(&posts, "other", true).await;

    let first = service
        .create(post_id, &comment_request("first"))
        .await
        .unwrap();
    let second = service
        .create(post_id, &comment_request("second"))
        .await
        .unwrap();
    service
        .create(other_post, &comment_request("elsewhere"))
        .await
        .unwrap();

    // Hide one; it drops out of the reader view.
    service
        .update(
            second.id,
            &UpdateCommentRequest {
                name: None,
                email: None,
                content: None,
                published: Some(false),
            },
            &POST_AUTHOR,
        )
        .await
        .unwrap();

    let visible = service.list_for_post(post_id).await.unwrap();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, first.id);

    let moderated = service
        .list(
            CommentFilter {
                post_id: Some(post_id),
                published: None,
            },
            Order::Desc,
        )
        .await
        .unwrap();
    assert_eq!(moderated.len(), 2);
    assert_eq!(moderated[0].id, second.id);
}
