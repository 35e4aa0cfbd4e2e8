//! Ledger backend errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Ledger pool is not open: {0}")]
    ClosedPool(String),
}
