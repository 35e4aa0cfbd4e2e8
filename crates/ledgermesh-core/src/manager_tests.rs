use super::*;

use ledgermesh_protocols::Ledger;

struct FakeLedger(&'static str);

impl Ledger for FakeLedger {
    fn pool_name(&self) -> &str {
        self.0
    }

    fn read_only(&self) -> bool {
        false
    }

    fn backend(&self) -> &'static str {
        "fake"
    }
}

fn ledger(pool: &'static str) -> Arc<dyn Ledger> {
    Arc::new(FakeLedger(pool))
}

fn manager() -> SdkLedgerManager {
    let mut production = LedgerPartition::new();
    production.insert("prod-1", ledger("pool-1"));
    production.insert("prod-2", ledger("pool-2"));

    let mut non_production = LedgerPartition::new();
    non_production.insert("dev-1", ledger("pool-3"));

    let write = production.get("prod-1").map(|l| ("prod-1".to_string(), l));

    SdkLedgerManager::new(
        Arc::new(crate::profile::SdkProfile::new("test")),
        production,
        non_production,
        write,
    )
}

#[test]
fn test_manager_partitions() {
    let manager = manager();
    assert_eq!(manager.production_ledgers().len(), 2);
    assert_eq!(manager.non_production_ledgers().len(), 1);
    assert_eq!(manager.profile().name(), "test");
}

#[test]
fn test_manager_write_ledger() {
    let manager = manager();
    let (id, instance) = manager.write_ledger().unwrap();
    assert_eq!(id, "prod-1");
    assert!(Arc::ptr_eq(
        instance,
        &manager.production_ledgers().get("prod-1").unwrap()
    ));
}

#[test]
fn test_manager_lookup_prefers_production() {
    let mut production = LedgerPartition::new();
    production.insert("shared", ledger("prod-pool"));
    let mut non_production = LedgerPartition::new();
    non_production.insert("shared", ledger("dev-pool"));

    let manager = VdrLedgerManager::new(
        Arc::new(crate::profile::VdrProfile::new("test")),
        production,
        non_production,
        None,
    );

    assert_eq!(manager.ledger("shared").unwrap().pool_name(), "prod-pool");
    assert!(manager.ledger("absent").is_none());
    assert!(manager.write_ledger().is_none());
}

#[test]
fn test_manager_lookup_falls_back_to_non_production() {
    let manager = manager();
    assert_eq!(manager.ledger("dev-1").unwrap().pool_name(), "pool-3");
}
