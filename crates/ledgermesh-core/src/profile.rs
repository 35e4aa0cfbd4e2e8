//! Session profiles.
//!
//! A profile is created by the embedding agent during provisioning; when
//! genesis transactions are configured the agent binds the startup ledger
//! here before the multi-ledger manager is built.

use std::sync::Arc;

use parking_lot::RwLock;

use ledgermesh_protocols::{Ledger, Profile, ProfileKind};

/// Profile backed by an embedded-SDK wallet.
pub struct SdkProfile {
    name: String,
    base_ledger: RwLock<Option<Arc<dyn Ledger>>>,
}

impl SdkProfile {
    /// Create a named profile with no ledger bound.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base_ledger: RwLock::new(None),
        }
    }

    /// Bind the startup ledger created during provisioning.
    pub fn bind_base_ledger(&self, ledger: Arc<dyn Ledger>) {
        *self.base_ledger.write() = Some(ledger);
    }
}

impl Profile for SdkProfile {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> ProfileKind {
        ProfileKind::Sdk
    }

    fn base_ledger(&self) -> Option<Arc<dyn Ledger>> {
        self.base_ledger.read().clone()
    }
}

/// Profile backed by a wallet paired with a VDR client.
pub struct VdrProfile {
    name: String,
    base_ledger: RwLock<Option<Arc<dyn Ledger>>>,
}

impl VdrProfile {
    /// Create a named profile with no ledger bound.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base_ledger: RwLock::new(None),
        }
    }

    /// Bind the startup ledger created during provisioning.
    pub fn bind_base_ledger(&self, ledger: Arc<dyn Ledger>) {
        *self.base_ledger.write() = Some(ledger);
    }
}

impl Profile for VdrProfile {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> ProfileKind {
        ProfileKind::Vdr
    }

    fn base_ledger(&self) -> Option<Arc<dyn Ledger>> {
        self.base_ledger.read().clone()
    }
}

/// Ephemeral wallet-only profile. Carries no ledger support.
pub struct InMemoryProfile {
    name: String,
}

impl InMemoryProfile {
    /// Create a named profile.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Profile for InMemoryProfile {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> ProfileKind {
        ProfileKind::InMemory
    }

    fn base_ledger(&self) -> Option<Arc<dyn Ledger>> {
        None
    }
}
