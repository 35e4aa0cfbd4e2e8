//! Shared-service wiring.

use std::sync::Arc;

use ledgermesh_protocols::{Cache, Injector};

/// Holder of shared services handed to backend construction.
#[derive(Default, Clone)]
pub struct SharedServices {
    cache: Option<Arc<dyn Cache>>,
}

impl SharedServices {
    /// Empty service set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Service set carrying a shared cache.
    pub fn with_cache(cache: Arc<dyn Cache>) -> Self {
        Self { cache: Some(cache) }
    }
}

impl Injector for SharedServices {
    fn cache(&self) -> Option<Arc<dyn Cache>> {
        self.cache.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::cache::MemoryCache;

    #[test]
    fn test_empty_services() {
        let services = SharedServices::new();
        assert!(services.cache().is_none());
    }

    #[test]
    fn test_services_with_cache() {
        let services = SharedServices::with_cache(Arc::new(MemoryCache::new()));
        assert!(services.cache().is_some());
    }
}
