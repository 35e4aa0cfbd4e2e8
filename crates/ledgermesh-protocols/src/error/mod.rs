//! Error types for the ledgermesh protocol layer.

mod ledger;
mod manager;

pub use ledger::*;
pub use manager::*;
