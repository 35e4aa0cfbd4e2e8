//! Shared cache protocol definition.
//!
//! Backends use the cache to avoid repeated remote reads. It is a
//! best-effort collaborator: a missing value (or a missing cache) is never
//! an error.

use std::time::Duration;

use async_trait::async_trait;

/// Core trait for the shared cache service.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Fetch a cached value.
    async fn get(&self, key: &str) -> Option<serde_json::Value>;

    /// Store a value, optionally expiring after `ttl`.
    async fn set(&self, key: &str, value: serde_json::Value, ttl: Option<Duration>);

    /// Drop a cached value.
    async fn clear(&self, key: &str);
}
