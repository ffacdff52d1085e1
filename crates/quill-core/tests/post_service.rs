use std::sync::Arc;

use quill_core::domain::{Actor, NewPost, PageRequest, PostFilter, Role};
use quill_core::error::{DomainError, RepoError};
use quill_core::ports::PostRepository;
use quill_core::service::PostService;
use quill_infra::database::memory::InMemoryPostRepository;
use quill_shared::dto::{CreatePostRequest, UpdatePostRequest};

const AUTHOR: Actor = Actor {
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

fn service() -> (PostService, Arc<InMemoryPostRepository>) {
    let repo = Arc::new(InMemoryPostRepository::new());
    (PostService::new(repo.clone()), repo)
}

fn create_request(title: &str, published: bool) -> CreatePostRequest {
    CreatePostRequest {
        title: Some(title.to_string()),
        content: Some("content".to_string()),
        published: Some(published),
    }
}

fn publish_request(published: bool) -> UpdatePostRequest {
    UpdatePostRequest {
        title: None,
        content: None,
        published: Some(published),
    }
}

#[tokio::test]
async fn create_derives_slug_from_title() {
    let (service, _) = service();

    let post = service
        .create(&create_request("Post #1: Introduction", true), AUTHOR.id)
        .await
        .unwrap();

    assert_eq!(post.slug, "post-1-introduction");
    assert_eq!(post.author_id, AUTHOR.id);
    assert!(post.published);
    assert!(post.published_at.is_some());
}

#[tokio::test]
async fn create_rejects_unslugifiable_title() {
    let (service, repo) = service();

    let err = service
        .create(&create_request("!!!", false), AUTHOR.id)
        .await
        .unwrap_err();

    let DomainError::Validation(msg) = err else {
        panic!("expected validation error");
    };
    assert_eq!(msg, "Title must contain valid characters");
    assert_eq!(repo.count(PostFilter::default()).await.unwrap(), 0);
}

#[tokio::test]
async fn colliding_titles_get_numbered_slugs() {
    let (service, _) = service();

    let first = service
        .create(&create_request("Hello World", true), AUTHOR.id)
        .await
        .unwrap();
    let second = service
        .create(&create_request("Hello World", true), AUTHOR.id)
        .await
        .unwrap();
    let third = service
        .create(&create_request("Hello World!", true), AUTHOR.id)
        .await
        .unwrap();

    assert_eq!(first.slug, "hello-world");
    assert_eq!(second.slug, "hello-world-1");
    assert_eq!(third.slug, "hello-world-2");
}

#[tokio::test]
async fn unique_slug_skips_every_taken_candidate() {
    let (service, _) = service();

    // Occupy "x" and "x-1" directly.
    service
        .create(&create_request("x", false), AUTHOR.id)
        .await
        .unwrap();
    service
        .create(&create_request("x", false), AUTHOR.id)
        .await
        .unwrap();

    let post = service
        .create(&create_request("x", false), AUTHOR.id)
        .await
        .unwrap();
    assert_eq!(post.slug, "x-2");
}

#[tokio::test]
async fn losing_the_slug_race_surfaces_conflict() {
    let (service, repo) = service();

    service
        .create(&create_request("Hello World", true), AUTHOR.id)
        .await
        .unwrap();

    // A racing writer that already probed sees "hello-world" as free
    // and tries to claim it; the store must reject the duplicate.
    let stolen = NewPost {
        author_id: OTHER_AUTHOR.id,
        title: "Hello World".to_string(),
        slug: "hello-world".to_string(),
        content: "content".to_string(),
        published: true,
        published_at: None,
    };
    let err = repo.create(stolen).await.unwrap_err();
    assert!(matches!(err, RepoError::Constraint(_)));
    assert_eq!(repo.count(PostFilter::default()).await.unwrap(), 1);
}

#[tokio::test]
async fn published_at_is_stamped_exactly_once() {
    let (service, _) = service();

    let draft = service
        .create(&create_request("Lifecycle", false), AUTHOR.id)
        .await
        .unwrap();
    assert!(!draft.published);
    assert!(draft.published_at.is_none());

    let published = service
        .update(draft.id, &publish_request(true), &AUTHOR)
        .await
        .unwrap();
    let first_published_at = published.published_at.expect("publish stamps the date");
    assert!(published.published);

    let unpublished = service
        .update(draft.id, &publish_request(false), &AUTHOR)
        .await
        .unwrap();
    assert!(!unpublished.published);
    assert_eq!(unpublished.published_at, Some(first_published_at));

    let republished = service
        .update(draft.id, &publish_request(true), &AUTHOR)
        .await
        .unwrap();
    assert_eq!(republished.published_at, Some(first_published_at));
}

#[tokio::test]
async fn retitling_rederives_the_slug() {
    let (service, _) = service();

    let post = service
        .create(&create_request("First Title", true), AUTHOR.id)
        .await
        .unwrap();
    assert_eq!(post.slug, "first-title");

    let renamed = service
        .update(
            post.id,
            &UpdatePostRequest {
                title: Some("Second Title".to_string()),
                content: None,
                published: None,
            },
            &AUTHOR,
        )
        .await
        .unwrap();
    assert_eq!(renamed.title, "Second Title");
    assert_eq!(renamed.slug, "second-title");

    // Same base slug -> slug stays put instead of gaining a counter.
    let retouched = service
        .update(
            post.id,
            &UpdatePostRequest {
                title: Some("Second Title!".to_string()),
                content: None,
                published: None,
            },
            &AUTHOR,
        )
        .await
        .unwrap();
    assert_eq!(retouched.slug, "second-title");
}

#[tokio::test]
async fn ownership_is_enforced_after_existence() {
    let (service, _) = service();

    let post = service
        .create(&create_request("Mine", false), AUTHOR.id)
        .await
        .unwrap();

    let err = service
        .update(post.id, &publish_request(true), &OTHER_AUTHOR)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Forbidden));

    let err = service
        .update(9999, &publish_request(true), &OTHER_AUTHOR)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));

    // Admins moderate anything.
    service
        .update(post.id, &publish_request(true), &ADMIN)
        .await
        .unwrap();
    service.delete(post.id, &ADMIN).await.unwrap();
}

#[tokio::test]
async fn drafts_hide_from_non_owners() {
    let (service, _) = service();

    let draft = service
        .create(&create_request("Draft", false), AUTHOR.id)
        .await
        .unwrap();

    assert!(service.get_by_id(draft.id, &AUTHOR).await.is_ok());
    assert!(service.get_by_id(draft.id, &ADMIN).await.is_ok());
    let err = service
        .get_by_id(draft.id, &OTHER_AUTHOR)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Forbidden));

    let err = service.get_by_slug("draft").await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}

#[tokio::test]
async fn list_filters_and_paginates() {
    let (service, _) = service();

    for i in 0..3 {
        service
            .create(&create_request(&format!("Published {i}"), true), AUTHOR.id)
            .await
            .unwrap();
    }
    service
        .create(&create_request("Draft", false), AUTHOR.id)
        .await
        .unwrap();

    let page = service
        .list(PostFilter::published_only(), PageRequest::new(Some(1), Some(2)))
        .await
        .unwrap();
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.total, 3);
    assert_eq!(page.pages(), 2);

    let everything = service
        .list(PostFilter::default(), PageRequest::default())
        .await
        .unwrap();
    assert_eq!(everything.total, 4);
}
