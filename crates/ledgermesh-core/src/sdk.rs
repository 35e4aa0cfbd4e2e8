//! Embedded-SDK ledger backend family.

use std::sync::Arc;

use parking_lot::Mutex;

use ledgermesh_protocols::{Cache, Ledger, LedgerError, Profile};

use crate::pool::LedgerPoolConfig;

/// Connection pool for an embedded-SDK ledger.
///
/// Opening is reference counted so nested sessions share one pool handle.
pub struct SdkLedgerPool {
    name: String,
    config: LedgerPoolConfig,
    ref_count: Mutex<u32>,
}

impl SdkLedgerPool {
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

    /// Keepalive window in seconds.
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

    /// SOCKS proxy address for pool traffic.
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

/// Ledger served by an embedded-SDK pool.
pub struct SdkLedger {
    pool: SdkLedgerPool,
    profile: Arc<dyn Profile>,
}

impl SdkLedger {
    /// Bind a ledger to its pool and the profile it serves.
    pub fn new(pool: SdkLedgerPool, profile: Arc<dyn Profile>) -> Self {
        Self { pool, profile }
    }

    /// The underlying pool.
    pub fn pool(&self) -> &SdkLedgerPool {
        &self.pool
    }

    /// The profile this ledger serves.
    pub fn profile(&self) -> &Arc<dyn Profile> {
        &self.profile
    }
}

impl Ledger for SdkLedger {
    fn pool_name(&self) -> &str {
        self.pool.name()
    }

    fn read_only(&self) -> bool {
        self.pool.read_only()
    }

    fn backend(&self) -> &'static str {
        "sdk"
    }
}

#[cfg(test)]
#[path = "sdk_tests.rs"]
mod tests;
