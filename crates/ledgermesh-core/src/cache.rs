//! In-process cache service.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use parking_lot::RwLock;

use ledgermesh_protocols::Cache;

struct CacheSlot {
    value: serde_json::Value,
    expires_at: Option<Instant>,
}

/// In-memory [`Cache`] implementation with per-entry expiry.
#[derive(Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, CacheSlot>>,
}

impl MemoryCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Cache for MemoryCache {
    async fn get(&self, key: &str) -> Option<serde_json::Value> {
        let entries = self.entries.read();
        let slot = entries.get(key)?;
        if let Some(expires_at) = slot.expires_at {
            if Instant::now() >= expires_at {
                return None;
            }
        }
        Some(slot.value.clone())
    }

    async fn set(&self, key: &str, value: serde_json::Value, ttl: Option<Duration>) {
        let expires_at = ttl.map(|ttl| Instant::now() + ttl);
        self.entries
            .write()
            .insert(key.to_string(), CacheSlot { value, expires_at });
    }

    async fn clear(&self, key: &str) {
        self.entries.write().remove(key);
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;
