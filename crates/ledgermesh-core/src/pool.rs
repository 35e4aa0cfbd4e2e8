//! Shared ledger pool configuration.

use std::sync::Arc;

use ledgermesh_config::LedgerConfigEntry;
use ledgermesh_protocols::Cache;

/// Parameters common to ledger pool construction.
#[derive(Clone, Default)]
pub struct LedgerPoolConfig {
    /// Seconds the pool connection is kept alive after the last use.
    pub keepalive: u32,

    /// Shared cache handle for remote-read caching.
    pub cache: Option<Arc<dyn Cache>>,

    /// Genesis transactions bootstrapping the pool.
    pub genesis_transactions: Option<String>,

    /// Whether writes through this pool are refused.
    pub read_only: bool,

    /// SOCKS proxy address for pool traffic.
    pub socks_proxy: Option<String>,
}

impl LedgerPoolConfig {
    /// Pool parameters carried by a configuration entry, plus the shared
    /// cache handle when one is available.
    pub fn from_entry(entry: &LedgerConfigEntry, cache: Option<Arc<dyn Cache>>) -> Self {
        Self {
            keepalive: entry.keepalive,
            cache,
            genesis_transactions: entry.genesis_transactions.clone(),
            read_only: entry.read_only,
            socks_proxy: entry.socks_proxy.clone(),
        }
    }
}
