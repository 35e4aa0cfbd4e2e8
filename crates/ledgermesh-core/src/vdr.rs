//! Verifiable-data-registry ledger backend family.
//!
//! Mirrors the SDK family surface; the VDR client keeps its own socket and
//! submits through the registry resolver rather than an embedded SDK.

use std::sync::Arc;

use parking_lot::Mutex;

use ledgermesh_protocols::{Cache, Ledger, LedgerError, Profile};

use crate::pool::LedgerPoolConfig;

/// Connection pool for a VDR-backed ledger.
pub struct VdrLedgerPool {
    name: String,
    config: LedgerPoolConfig,
    ref_count: Mutex<u32>,
}

impl VdrLedgerPool {
    /// Create a pool for the named network.
    pub fn new(name: impl Into<String>, config: LedgerPoolConfig) -> Self {
        Self {
            name: name.into(),
            config,
            ref_count: Mutex::new(0),
        }
    }

    /// Pool name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Seconds the resolver socket lingers after the last request.
    pub fn keepalive(&self) -> u32 {
        self.config.keepalive
    }

    /// Shared cache handle, if one was injected.
    pub fn cache(&self) -> Option<Arc<dyn Cache>> {
        self.config.cache.clone()
    }

    /// Genesis transactions bootstrapping the pool.
    pub fn genesis_transactions(&self) -> Option<&str> {
        self.config.genesis_transactions.as_deref()
    }

    /// Whether writes through this pool are refused.
    pub fn read_only(&self) -> bool {
        self.config.read_only
    }

    /// SOCKS proxy address for resolver traffic.
    pub fn socks_proxy(&self) -> Option<&str> {
        self.config.socks_proxy.as_deref()
    }

    /// Whether the pool currently holds open references.
    pub fn is_open(&self) -> bool {
        *self.ref_count.lock() > 0
    }

    /// Take a pool reference, returning the new reference count.
    pub fn open(&self) -> u32 {
        let mut count = self.ref_count.lock();
        *count += 1;
        *count
    }

    /// Release one pool reference.
    pub fn close(&self) -> Result<(), LedgerError> {
        let mut count = self.ref_count.lock();
        if *count == 0 {
            return Err(LedgerError::ClosedPool(self.name.clone()));
        }
        *count -= 1;
        Ok(())
    }
}

/// Ledger served by a VDR pool.
pub struct VdrLedger {
    pool: VdrLedgerPool,
    profile: Arc<dyn Profile>,
}

impl VdrLedger {
    /// Bind a ledger to its pool and the profile it serves.
    pub fn new(pool: VdrLedgerPool, profile: Arc<dyn Profile>) -> Self {
        Self { pool, profile }
    }

    /// The underlying pool.
    pub fn pool(&self) -> &VdrLedgerPool {
        &self.pool
    }

    /// The profile this ledger serves.
    pub fn profile(&self) -> &Arc<dyn Profile> {
        &self.profile
    }
}

impl Ledger for VdrLedger {
    fn pool_name(&self) -> &str {
        self.pool.name()
    }

    fn read_only(&self) -> bool {
        self.pool.read_only()
    }

    fn backend(&self) -> &'static str {
        "vdr"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::profile::VdrProfile;

    #[test]
    fn test_pool_ref_count() {
        let pool = VdrLedgerPool::new("indicio", LedgerPoolConfig::default());
        assert_eq!(pool.open(), 1);
        pool.close().unwrap();
        assert!(pool.close().is_err());
    }

    #[test]
    fn test_ledger_backend_tag() {
        let profile = Arc::new(VdrProfile::new("test"));
        let ledger = VdrLedger::new(
            VdrLedgerPool::new("indicio", LedgerPoolConfig::default()),
            profile,
        );

        assert_eq!(ledger.backend(), "vdr");
        assert_eq!(ledger.pool_name(), "indicio");
        assert!(!ledger.read_only());
    }
}
