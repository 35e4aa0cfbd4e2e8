//! Settings schema.

use serde::{Deserialize, Serialize};

/// Top-level settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Ledger wiring.
    #[serde(default)]
    pub ledger: LedgerSettings,
}

/// The `[ledger]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LedgerSettings {
    /// Genesis transactions for the startup ledger. When present, the
    /// startup ledger bound to the profile joins the production set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genesis_transactions: Option<String>,

    /// Configured ledgers, in priority order.
    #[serde(default)]
    pub config_list: Vec<LedgerConfigEntry>,
}

/// One configured ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerConfigEntry {
    /// Unique ledger id.
    pub id: String,

    /// Pool the ledger connects through.
    pub pool_name: String,

    /// Whether the ledger is a production network.
    #[serde(default)]
    pub is_production: bool,

    /// Whether the ledger accepts writes for this agent.
    #[serde(default)]
    pub is_write: bool,

    /// Genesis transactions bootstrapping the pool.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genesis_transactions: Option<String>,

    /// Seconds the pool connection is kept alive after the last use.
    #[serde(default)]
    pub keepalive: u32,

    /// Whether writes to this ledger are refused.
    #[serde(default)]
    pub read_only: bool,

    /// SOCKS proxy address for pool traffic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub socks_proxy: Option<String>,
}
