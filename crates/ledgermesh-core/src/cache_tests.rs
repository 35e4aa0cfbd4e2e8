use super::*;

#[tokio::test]
async fn test_set_and_get() {
    let cache = MemoryCache::new();
    cache
        .set("txn:1", serde_json::json!({"seq_no": 1}), None)
        .await;

    let value = cache.get("txn:1").await.unwrap();
    assert_eq!(value["seq_no"], 1);
}

#[tokio::test]
async fn test_get_missing() {
    let cache = MemoryCache::new();
    assert!(cache.get("missing").await.is_none());
}

#[tokio::test]
async fn test_ttl_expiry() {
    let cache = MemoryCache::new();
    cache
        .set(
            "txn:1",
            serde_json::json!("payload"),
            Some(Duration::from_millis(0)),
        )
        .await;

    assert!(cache.get("txn:1").await.is_none());
}

#[tokio::test]
async fn test_unexpired_entry_survives() {
    let cache = MemoryCache::new();
    cache
        .set(
            "txn:1",
            serde_json::json!("payload"),
            Some(Duration::from_secs(60)),
        )
        .await;

    assert!(cache.get("txn:1").await.is_some());
}

#[tokio::test]
async fn test_clear() {
    let cache = MemoryCache::new();
    cache.set("txn:1", serde_json::json!(1), None).await;
    cache.clear("txn:1").await;
    assert!(cache.get("txn:1").await.is_none());
}

#[tokio::test]
async fn test_overwrite_replaces_value() {
    let cache = MemoryCache::new();
    cache.set("txn:1", serde_json::json!(1), None).await;
    cache.set("txn:1", serde_json::json!(2), None).await;
    assert_eq!(cache.get("txn:1").await.unwrap(), serde_json::json!(2));
}
