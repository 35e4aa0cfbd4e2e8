//! Insertion-ordered ledger partitions.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::ledger::Ledger;

/// Insertion-ordered mapping from ledger id to ledger instance.
///
/// Downstream consumers treat the first entry as the default for
/// iteration, so order is part of the contract.
#[derive(Default, Clone)]
pub struct LedgerPartition {
    inner: IndexMap<String, Arc<dyn Ledger>>,
}

impl LedgerPartition {
    /// Create an empty partition.
    pub fn new() -> Self {
        Self {
            inner: IndexMap::new(),
        }
    }

    /// Insert a ledger, appending to the iteration order.
    ///
    /// Re-inserting an existing id replaces the instance in place and
    /// returns the previous one.
    pub fn insert(
        &mut self,
        id: impl Into<String>,
        ledger: Arc<dyn Ledger>,
    ) -> Option<Arc<dyn Ledger>> {
        self.inner.insert(id.into(), ledger)
    }

    /// Get a ledger by id.
    pub fn get(&self, id: &str) -> Option<Arc<dyn Ledger>> {
        self.inner.get(id).cloned()
    }

    /// Whether the partition holds the given id.
    pub fn contains(&self, id: &str) -> bool {
        self.inner.contains_key(id)
    }

    /// Move an existing entry to the front of the iteration order.
    ///
    /// Returns `false` and leaves the order untouched when the id is
    /// absent.
    pub fn move_to_front(&mut self, id: &str) -> bool {
        match self.inner.get_index_of(id) {
            Some(index) => {
                self.inner.move_index(index, 0);
                true
            }
            None => false,
        }
    }

    /// The first entry in iteration order.
    pub fn first(&self) -> Option<(&str, &Arc<dyn Ledger>)> {
        self.inner.first().map(|(id, ledger)| (id.as_str(), ledger))
    }

    /// Ledger ids in iteration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.inner.keys().map(String::as_str)
    }

    /// Entries in iteration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<dyn Ledger>)> {
        self.inner.iter().map(|(id, ledger)| (id.as_str(), ledger))
    }

    /// Number of ledgers in the partition.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the partition is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl fmt::Debug for LedgerPartition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.keys()).finish()
    }
}
