mod common;

use axum_test::TestServer;
use hashlink::routes::router;

#[tokio::test]
async fn test_health_endpoint_success() {
    let pool = common::create_test_pool().await;
    common::create_test_link(&pool, "abcd1234", "https://example.com/").await;

    let server = TestServer::new(router(common::create_test_state(pool), "static")).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["storage"]["status"], "ok");
    assert_eq!(json["checks"]["storage"]["message"], "1 short URLs stored");
}

#[tokio::test]
async fn test_health_endpoint_structure() {
    let server = TestServer::new(router(common::create_memory_state(), "static")).unwrap();

    let response = server.get("/health").await;

    let json = response.json::<serde_json::Value>();

    assert!(json.get("status").is_some());
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json["checks"].get("storage").is_some());
}

#[tokio::test]
async fn test_health_storage_down() {
    let pool = common::create_test_pool().await;
    let server =
        TestServer::new(router(common::create_test_state(pool.clone()), "static")).unwrap();

    pool.close().await;

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), 503);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["storage"]["status"], "error");
}
