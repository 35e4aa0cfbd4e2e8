//! Best-effort shared-service lookup.

use std::sync::Arc;

use crate::cache::Cache;

/// Supplies shared services to backend construction.
///
/// Lookups never fail; a service that is not configured yields `None`.
pub trait Injector: Send + Sync {
    /// The shared cache service, if one is configured.
    fn cache(&self) -> Option<Arc<dyn Cache>>;
}
