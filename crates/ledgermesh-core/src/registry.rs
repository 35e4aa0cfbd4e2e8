//! Factory registry for manager variants.

use std::sync::Arc;

use dashmap::DashMap;

use ledgermesh_protocols::{
    LedgerPartition, ManagerKind, MultiLedgerError, MultiLedgerManager, Profile, WriteLedgerInfo,
};

use crate::manager::{SdkLedgerManager, VdrLedgerManager};

/// Constructor for one manager variant.
pub type ManagerFactory = fn(
    Arc<dyn Profile>,
    LedgerPartition,
    LedgerPartition,
    Option<WriteLedgerInfo>,
) -> Arc<dyn MultiLedgerManager>;

/// Registration-time table mapping manager kinds to constructors.
///
/// The kind set is closed; a lookup miss means the variant was never
/// registered and surfaces as a configuration error at the provider.
pub struct ManagerRegistry {
    factories: DashMap<ManagerKind, ManagerFactory>,
}

impl ManagerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            factories: DashMap::new(),
        }
    }

    /// Register a factory for a manager kind.
    pub fn register(
        &self,
        kind: ManagerKind,
        factory: ManagerFactory,
    ) -> Result<(), MultiLedgerError> {
        if self.factories.contains_key(&kind) {
            return Err(MultiLedgerError::ManagerAlreadyRegistered(kind));
        }

        self.factories.insert(kind, factory);
        Ok(())
    }

    /// Resolve the factory for a manager kind.
    pub fn resolve(&self, kind: ManagerKind) -> Option<ManagerFactory> {
        self.factories.get(&kind).map(|factory| *factory)
    }

    /// Registered kinds.
    pub fn kinds(&self) -> Vec<ManagerKind> {
        self.factories.iter().map(|entry| *entry.key()).collect()
    }
}

impl Default for ManagerRegistry {
    /// Registry with both built-in variants registered.
    fn default() -> Self {
        let registry = Self::new();
        // Both kinds are vacant on a fresh registry, so neither call can fail.
        let _ = registry.register(ManagerKind::Basic, |profile, production, non_production, write| {
            Arc::new(SdkLedgerManager::new(
                profile,
                production,
                non_production,
                write,
            ))
        });
        let _ = registry.register(ManagerKind::Vdr, |profile, production, non_production, write| {
            Arc::new(VdrLedgerManager::new(
                profile,
                production,
                non_production,
                write,
            ))
        });
        registry
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
