//! Multi-ledger wiring errors.

use thiserror::Error;

use crate::manager::ManagerKind;
use crate::profile::ProfileKind;

#[derive(Debug, Error)]
pub enum MultiLedgerError {
    #[error("Unsupported root profile kind: {0} (expected sdk or vdr)")]
    UnsupportedProfile(ProfileKind),

    #[error("Unknown multiple ledger manager type: {0}")]
    UnknownManagerType(ManagerKind),

    #[error("Manager type already registered: {0}")]
    ManagerAlreadyRegistered(ManagerKind),

    #[error("Genesis transactions are configured but no base ledger is bound to the profile")]
    MissingBaseLedger,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_profile_error() {
        let err = MultiLedgerError::UnsupportedProfile(ProfileKind::InMemory);
        assert!(err.to_string().contains("in-memory"));
        assert!(err.to_string().contains("Unsupported"));
    }

    #[test]
    fn test_unknown_manager_type_error() {
        let err = MultiLedgerError::UnknownManagerType(ManagerKind::Vdr);
        assert!(err.to_string().contains("vdr"));
        assert!(err.to_string().contains("Unknown"));
    }

    #[test]
    fn test_already_registered_error() {
        let err = MultiLedgerError::ManagerAlreadyRegistered(ManagerKind::Basic);
        assert!(err.to_string().contains("basic"));
        assert!(err.to_string().contains("already registered"));
    }

    #[test]
    fn test_missing_base_ledger_error() {
        let err = MultiLedgerError::MissingBaseLedger;
        assert!(err.to_string().contains("no base ledger"));
    }

    #[test]
    fn test_error_debug() {
        let err = MultiLedgerError::MissingBaseLedger;
        let debug = format!("{:?}", err);
        assert!(debug.contains("MissingBaseLedger"));
    }
}
