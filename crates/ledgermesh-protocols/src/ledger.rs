//! Ledger backend protocol definition.
//!
//! A ledger is one configured remote data source capable of reads and, if
//! designated, writes. Connection handling and transaction submission live
//! in the backend families; this trait exposes the identity the wiring
//! layer works with.

/// Core trait for a configured ledger backend.
pub trait Ledger: Send + Sync {
    /// Name of the pool this ledger connects through.
    fn pool_name(&self) -> &str;

    /// Whether the ledger rejects write submissions.
    fn read_only(&self) -> bool;

    /// Tag of the backend family serving this ledger.
    fn backend(&self) -> &'static str;
}
