//! Multi-ledger manager variants.
//!
//! A manager holds the wired ledger partitions for one backend family.
//! Read dispatch and write submission live with the backends; the manager
//! is the lookup surface downstream callers hold on to.

use std::sync::Arc;

use ledgermesh_protocols::{LedgerPartition, MultiLedgerManager, Profile, WriteLedgerInfo};

/// Manager over embedded-SDK ledger pools.
pub struct SdkLedgerManager {
    profile: Arc<dyn Profile>,
    production_ledgers: LedgerPartition,
    non_production_ledgers: LedgerPartition,
    write_ledger_info: Option<WriteLedgerInfo>,
}

impl SdkLedgerManager {
    /// Assemble a manager from wired partitions.
    pub fn new(
        profile: Arc<dyn Profile>,
        production_ledgers: LedgerPartition,
        non_production_ledgers: LedgerPartition,
        write_ledger_info: Option<WriteLedgerInfo>,
    ) -> Self {
        Self {
            profile,
            production_ledgers,
            non_production_ledgers,
            write_ledger_info,
        }
    }

    /// The root profile this manager serves.
    pub fn profile(&self) -> &Arc<dyn Profile> {
        &self.profile
    }
}

impl MultiLedgerManager for SdkLedgerManager {
    fn production_ledgers(&self) -> &LedgerPartition {
        &self.production_ledgers
    }

    fn non_production_ledgers(&self) -> &LedgerPartition {
        &self.non_production_ledgers
    }

    fn write_ledger(&self) -> Option<&WriteLedgerInfo> {
        self.write_ledger_info.as_ref()
    }
}

/// Manager over verifiable-data-registry ledgers.
pub struct VdrLedgerManager {
    profile: Arc<dyn Profile>,
    production_ledgers: LedgerPartition,
    non_production_ledgers: LedgerPartition,
    write_ledger_info: Option<WriteLedgerInfo>,
}

impl VdrLedgerManager {
    /// Assemble a manager from wired partitions.
    pub fn new(
        profile: Arc<dyn Profile>,
        production_ledgers: LedgerPartition,
        non_production_ledgers: LedgerPartition,
        write_ledger_info: Option<WriteLedgerInfo>,
    ) -> Self {
        Self {
            profile,
            production_ledgers,
            non_production_ledgers,
            write_ledger_info,
        }
    }

    /// The root profile this manager serves.
    pub fn profile(&self) -> &Arc<dyn Profile> {
        &self.profile
    }
}

impl MultiLedgerManager for VdrLedgerManager {
    fn production_ledgers(&self) -> &LedgerPartition {
        &self.production_ledgers
    }

    fn non_production_ledgers(&self) -> &LedgerPartition {
        &self.non_production_ledgers
    }

    fn write_ledger(&self) -> Option<&WriteLedgerInfo> {
        self.write_ledger_info.as_ref()
    }
}

#[cfg(test)]
#[path = "manager_tests.rs"]
mod tests;
