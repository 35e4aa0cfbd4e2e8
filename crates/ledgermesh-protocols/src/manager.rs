//! Multi-ledger manager protocol definitions.

use std::fmt;
use std::sync::Arc;

use crate::ledger::Ledger;
use crate::partition::LedgerPartition;

/// The write ledger designation: id plus instance.
pub type WriteLedgerInfo = (String, Arc<dyn Ledger>);

/// Implementation variant of the multi-ledger manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ManagerKind {
    /// Manager over embedded-SDK ledger pools.
    Basic,
    /// Manager over verifiable-data-registry ledgers.
    Vdr,
}

impl fmt::Display for ManagerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ManagerKind::Basic => "basic",
            ManagerKind::Vdr => "vdr",
        };
        f.write_str(name)
    }
}

/// Core trait for the constructed multi-ledger manager.
pub trait MultiLedgerManager: Send + Sync {
    /// Production ledgers in configuration order.
    fn production_ledgers(&self) -> &LedgerPartition;

    /// Non-production ledgers in configuration order.
    fn non_production_ledgers(&self) -> &LedgerPartition;

    /// The ledger designated to accept writes.
    fn write_ledger(&self) -> Option<&WriteLedgerInfo>;

    /// Look up a ledger by id, production partition first.
    fn ledger(&self, id: &str) -> Option<Arc<dyn Ledger>> {
        self.production_ledgers()
            .get(id)
            .or_else(|| self.non_production_ledgers().get(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manager_kind_display() {
        assert_eq!(ManagerKind::Basic.to_string(), "basic");
        assert_eq!(ManagerKind::Vdr.to_string(), "vdr");
    }
}
