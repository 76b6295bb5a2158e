use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

use arena_core::domain::NewsCategory;
use arena_core::ports::NewsRepository;

use super::entity::news;
use super::postgres_repo::PostgresNewsRepository;

fn sample_row(slug: &str) -> news::Model {
    let now = chrono::Utc::now();
    news::Model {
        id: "news-1700000000000".to_owned(),
        title: "Test Haber".to_owned(),
        content: "İçerik".to_owned(),
        excerpt: "Özet".to_owned(),
        image: String::new(),
        category: "haber".to_owned(),
        date: "2024-03-01".to_owned(),
        slug: slug.to_owned(),
        featured: true,
        author: "Arena Bulls Medya".to_owned(),
        created_at: now.into(),
        updated_at: now.into(),
    }
}

#[tokio::test]
async fn test_find_news_by_slug() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![sample_row("test-haber-4412")]])
        .into_connection();

    let repo = PostgresNewsRepository::new(db);
    let result = repo.find_by_slug("test-haber-4412").await.unwrap();

    let article = result.unwrap();
    assert_eq!(article.title, "Test Haber");
    assert_eq!(article.slug, "test-haber-4412");
    assert_eq!(article.category, NewsCategory::Haber);
}

#[tokio::test]
async fn test_find_news_by_id_absent() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results::<news::Model, _, _>(vec![vec![]])
        .into_connection();

    let repo = PostgresNewsRepository::new(db);
    let result = repo.find_by_id("news-0").await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_delete_missing_row_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let repo = PostgresNewsRepository::new(db);
    let result = repo.delete("news-0").await;
    assert!(matches!(
        result,
        Err(arena_core::error::RepoError::NotFound)
    ));
}
