//! # Ledgermesh Core
//!
//! Construction and wiring of multi-ledger managers.
//!
//! ## Components
//!
//! - [`MultiLedgerManagerProvider`] - Builds and memoizes the manager for a root profile
//! - [`ManagerRegistry`] - Factory table for the closed set of manager variants
//! - Ledger backend families ([`sdk`], [`vdr`]) and session [`profile`]s
//! - [`MemoryCache`] - In-process cache service shared with the backends

pub mod cache;
pub mod manager;
pub mod pool;
pub mod profile;
pub mod provider;
pub mod registry;
pub mod sdk;
pub mod services;
pub mod vdr;

pub use cache::MemoryCache;
pub use manager::{SdkLedgerManager, VdrLedgerManager};
pub use pool::LedgerPoolConfig;
pub use profile::{InMemoryProfile, SdkProfile, VdrProfile};
pub use provider::MultiLedgerManagerProvider;
pub use registry::{ManagerFactory, ManagerRegistry};
pub use sdk::{SdkLedger, SdkLedgerPool};
pub use services::SharedServices;
pub use vdr::{VdrLedger, VdrLedgerPool};
