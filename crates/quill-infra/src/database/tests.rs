use chrono::Utc;
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

use quill_core::domain::Post;
use quill_core::error::RepoError;
use quill_core::ports::PostRepository;

use crate::database::entity::post;
use crate::database::postgres::PostgresPostRepository;

fn post_model(id: i64, slug: &str) -> post::Model {
    let now = Utc::now();
    post::Model {
        id,
        author_id: 1,
        title: "Test Post".to_owned(),
        slug: slug.to_owned(),
        content: "Content".to_owned(),
        published: true,
        published_at: Some(now.into()),
        created_at: now.into(),
        updated_at: now.into(),
    }
}

#[tokio::test]
async fn find_post_by_slug_maps_to_domain() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![post_model(7, "test-post")]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let found: Option<Post> = repo.find_by_slug("test-post").await.unwrap();

    let found = found.unwrap();
    assert_eq!(found.id, 7);
    assert_eq!(found.slug, "test-post");
    assert!(found.published);
}

#[tokio::test]
async fn find_post_by_id_handles_missing_rows() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<post::Model>::new()])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    assert!(repo.find_by_id(999).await.unwrap().is_none());
}

#[tokio::test]
async fn delete_with_no_rows_affected_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let err = repo.delete(999).await.unwrap_err();
    assert!(matches!(err, RepoError::NotFound));
}
