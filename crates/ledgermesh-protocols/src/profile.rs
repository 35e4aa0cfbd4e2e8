//! Session profile protocol definition.
//!
//! The profile is the root context an agent session runs under. Its kind
//! decides which ledger backend family serves it.

use std::fmt;
use std::sync::Arc;

use crate::ledger::Ledger;

/// Storage kind backing a session profile.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileKind {
    /// Embedded-SDK wallet; ledger access goes through SDK pools.
    Sdk,
    /// Wallet paired with a verifiable-data-registry client.
    Vdr,
    /// Ephemeral wallet-only profile with no ledger support.
    InMemory,
}

impl fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProfileKind::Sdk => "sdk",
            ProfileKind::Vdr => "vdr",
            ProfileKind::InMemory => "in-memory",
        };
        f.write_str(name)
    }
}

/// Core trait for the root session context.
///
/// A profile may carry a base ledger bound during provisioning; the wiring
/// layer falls back to it when genesis transactions are configured.
pub trait Profile: Send + Sync {
    /// Profile name.
    fn name(&self) -> &str;

    /// Storage kind of this profile.
    fn kind(&self) -> ProfileKind;

    /// The startup ledger bound to this profile, if any.
    fn base_ledger(&self) -> Option<Arc<dyn Ledger>>;
}
