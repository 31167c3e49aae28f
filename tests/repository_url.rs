mod common;

use hashlink::domain::entities::NewUrlMapping;
use hashlink::domain::repositories::UrlRepository;
use hashlink::error::AppError;
use hashlink::infrastructure::persistence::SqliteUrlRepository;
use std::sync::Arc;

async fn setup() -> (SqliteUrlRepository, sqlx::SqlitePool) {
    let pool = common::create_test_pool().await;
    (SqliteUrlRepository::new(Arc::new(pool.clone())), pool)
}

#[tokio::test]
async fn test_insert_mapping() {
    let (repo, _pool) = setup().await;

    let mapping = repo
        .insert(NewUrlMapping::new("abcd1234", "https://example.com/"))
        .await
        .unwrap();

    assert!(mapping.id > 0);
    assert_eq!(mapping.short_code, "abcd1234");
    assert_eq!(mapping.original_url, "https://example.com/");
    assert_eq!(mapping.hits, 0);
}

#[tokio::test]
async fn test_insert_duplicate_code_conflicts() {
    let (repo, pool) = setup().await;

    repo.insert(NewUrlMapping::new("abcd1234", "https://example.com/"))
        .await
        .unwrap();

    let result = repo
        .insert(NewUrlMapping::new("abcd1234", "https://other.com/"))
        .await;

    assert!(matches!(result, Err(AppError::Conflict { .. })));
    assert_eq!(common::count_links(&pool).await, 1);
}

#[tokio::test]
async fn test_find_by_code() {
    let (repo, pool) = setup().await;
    common::create_test_link(&pool, "findme12", "https://example.com/find").await;

    let found = repo.find_by_code("findme12").await.unwrap().unwrap();
    assert_eq!(found.original_url, "https://example.com/find");

    assert!(repo.find_by_code("missing1").await.unwrap().is_none());
}

#[tokio::test]
async fn test_find_by_code_is_case_sensitive() {
    let (repo, pool) = setup().await;
    common::create_test_link(&pool, "AbCd1234", "https://example.com/").await;

    assert!(repo.find_by_code("abcd1234").await.unwrap().is_none());
    assert!(repo.find_by_code("AbCd1234").await.unwrap().is_some());
}

#[tokio::test]
async fn test_find_by_code_does_not_count() {
    let (repo, pool) = setup().await;
    common::create_test_link(&pool, "abcd1234", "https://example.com/").await;

    repo.find_by_code("abcd1234").await.unwrap();
    repo.find_by_code("abcd1234").await.unwrap();

    assert_eq!(common::get_hits(&pool, "abcd1234").await, 0);
}

#[tokio::test]
async fn test_find_by_original_url() {
    let (repo, pool) = setup().await;
    common::create_test_link(&pool, "first123", "https://example.com/").await;
    common::create_test_link(&pool, "second12", "https://example.com/").await;

    let found = repo
        .find_by_original_url("https://example.com/")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.short_code, "first123");

    assert!(
        repo.find_by_original_url("https://nowhere.com/")
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn test_record_hit_increments() {
    let (repo, pool) = setup().await;
    common::create_test_link(&pool, "abcd1234", "https://example.com/").await;

    let first = repo.record_hit("abcd1234").await.unwrap().unwrap();
    assert_eq!(first.hits, 1);
    assert_eq!(first.original_url, "https://example.com/");

    let second = repo.record_hit("abcd1234").await.unwrap().unwrap();
    assert_eq!(second.hits, 2);

    assert_eq!(common::get_hits(&pool, "abcd1234").await, 2);
}

#[tokio::test]
async fn test_record_hit_unknown_code() {
    let (repo, pool) = setup().await;

    assert!(repo.record_hit("missing1").await.unwrap().is_none());
    assert_eq!(common::count_links(&pool).await, 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_record_hit_concurrent() {
    let (repo, pool) = setup().await;
    common::create_test_link(&pool, "abcd1234", "https://example.com/").await;

    let repo = Arc::new(repo);
    let mut handles = Vec::new();
    for _ in 0..25 {
        let repo = repo.clone();
        handles.push(tokio::spawn(async move {
            repo.record_hit("abcd1234").await.unwrap().unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(common::get_hits(&pool, "abcd1234").await, 25);
}

#[tokio::test]
async fn test_count() {
    let (repo, pool) = setup().await;
    assert_eq!(repo.count().await.unwrap(), 0);

    common::create_test_link(&pool, "aaaa1111", "https://a.com/").await;
    common::create_test_link(&pool, "bbbb2222", "https://b.com/").await;

    assert_eq!(repo.count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_list_top_orders_by_hits() {
    let (repo, pool) = setup().await;
    common::create_test_link(&pool, "aaaa1111", "https://a.com/").await;
    common::create_test_link(&pool, "bbbb2222", "https://b.com/").await;
    common::create_test_link(&pool, "cccc3333", "https://c.com/").await;

    for _ in 0..3 {
        repo.record_hit("bbbb2222").await.unwrap();
    }
    repo.record_hit("cccc3333").await.unwrap();

    let top = repo.list_top(10).await.unwrap();
    let codes: Vec<&str> = top.iter().map(|m| m.short_code.as_str()).collect();
    assert_eq!(codes, vec!["bbbb2222", "cccc3333", "aaaa1111"]);

    let limited = repo.list_top(1).await.unwrap();
    assert_eq!(limited.len(), 1);
    assert_eq!(limited[0].hits, 3);
}

#[tokio::test]
async fn test_created_at_is_set() {
    let (repo, _pool) = setup().await;
    let before = chrono::Utc::now() - chrono::Duration::seconds(5);

    let mapping = repo
        .insert(NewUrlMapping::new("abcd1234", "https://example.com/"))
        .await
        .unwrap();

    assert!(mapping.created_at >= before);
}
