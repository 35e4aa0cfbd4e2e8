//! Multi-ledger manager construction.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{info, warn};

use ledgermesh_config::Settings;
use ledgermesh_protocols::{
    Injector, Ledger, LedgerPartition, ManagerKind, MultiLedgerError, MultiLedgerManager, Profile,
    ProfileKind, WriteLedgerInfo,
};

use crate::pool::LedgerPoolConfig;
use crate::registry::ManagerRegistry;
use crate::sdk::{SdkLedger, SdkLedgerPool};
use crate::vdr::{VdrLedger, VdrLedgerPool};

/// Prefix of the synthetic id given to the startup ledger.
const STARTUP_ID_PREFIX: &str = "startup::";

/// Builds the multi-ledger manager matching the root profile and memoizes
/// it for the lifetime of the profile.
///
/// The profile kind picks the manager variant: an SDK profile gets the
/// basic manager, a VDR profile the VDR manager. Any other kind is a
/// configuration error.
pub struct MultiLedgerManagerProvider {
    root_profile: Arc<dyn Profile>,
    registry: ManagerRegistry,
    instances: Mutex<HashMap<ManagerKind, Arc<dyn MultiLedgerManager>>>,
}

impl MultiLedgerManagerProvider {
    /// Provider with the built-in manager variants registered.
    pub fn new(root_profile: Arc<dyn Profile>) -> Self {
        Self::with_registry(root_profile, ManagerRegistry::default())
    }

    /// Provider over a caller-supplied variant registry.
    pub fn with_registry(root_profile: Arc<dyn Profile>, registry: ManagerRegistry) -> Self {
        Self {
            root_profile,
            registry,
            instances: Mutex::new(HashMap::new()),
        }
    }

    /// Build (or return the memoized) manager for the root profile.
    ///
    /// The first successful call per manager kind freezes the result:
    /// later calls return the same instance without re-reading settings.
    /// On failure nothing is memoized.
    pub fn provide(
        &self,
        settings: &Settings,
        injector: &dyn Injector,
    ) -> Result<Arc<dyn MultiLedgerManager>, MultiLedgerError> {
        let kind = match self.root_profile.kind() {
            ProfileKind::Sdk => ManagerKind::Basic,
            ProfileKind::Vdr => ManagerKind::Vdr,
            other => return Err(MultiLedgerError::UnsupportedProfile(other)),
        };

        // The lock is held across construction so concurrent callers get
        // exactly one manager per kind.
        let mut instances = self.instances.lock();
        if let Some(manager) = instances.get(&kind) {
            return Ok(manager.clone());
        }

        info!(manager_kind = %kind, "Creating multiple ledger manager");
        let (production, non_production, write_ledger) =
            self.build_ledger_sets(settings, injector, kind)?;
        let factory = self
            .registry
            .resolve(kind)
            .ok_or(MultiLedgerError::UnknownManagerType(kind))?;
        let manager = factory(
            self.root_profile.clone(),
            production,
            non_production,
            write_ledger,
        );
        instances.insert(kind, manager.clone());
        Ok(manager)
    }

    /// One pass over the configuration list, partitioning ledgers by
    /// production flag and tracking the write designation, then the
    /// startup ledger when genesis transactions are configured.
    fn build_ledger_sets(
        &self,
        settings: &Settings,
        injector: &dyn Injector,
        kind: ManagerKind,
    ) -> Result<(LedgerPartition, LedgerPartition, Option<WriteLedgerInfo>), MultiLedgerError> {
        let mut production = LedgerPartition::new();
        let mut non_production = LedgerPartition::new();
        let mut write_ledger: Option<WriteLedgerInfo> = None;

        for entry in &settings.ledger.config_list {
            let pool_config = LedgerPoolConfig::from_entry(entry, injector.cache());
            let instance: Arc<dyn Ledger> = match kind {
                ManagerKind::Basic => Arc::new(SdkLedger::new(
                    SdkLedgerPool::new(entry.pool_name.as_str(), pool_config),
                    self.root_profile.clone(),
                )),
                ManagerKind::Vdr => Arc::new(VdrLedger::new(
                    VdrLedgerPool::new(entry.pool_name.as_str(), pool_config),
                    self.root_profile.clone(),
                )),
            };

            if entry.is_write {
                if let Some((previous, _)) = &write_ledger {
                    warn!(
                        previous = %previous,
                        next = %entry.id,
                        "Write ledger designation overridden"
                    );
                }
                write_ledger = Some((entry.id.clone(), instance.clone()));
            }

            if entry.is_production {
                production.insert(entry.id.as_str(), instance);
            } else {
                non_production.insert(entry.id.as_str(), instance);
            }
        }

        if settings.ledger.genesis_transactions.is_some() {
            let startup = self
                .root_profile
                .base_ledger()
                .ok_or(MultiLedgerError::MissingBaseLedger)?;
            let startup_id = format!("{STARTUP_ID_PREFIX}{}", startup.pool_name());
            production.insert(startup_id.as_str(), startup.clone());
            if write_ledger.is_none() {
                write_ledger = Some((startup_id.clone(), startup));
                production.move_to_front(&startup_id);
            }
        }

        Ok((production, non_production, write_ledger))
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod tests;
