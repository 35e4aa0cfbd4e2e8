//! # Ledgermesh Config
//!
//! Settings schema and loading for ledgermesh.

pub mod error;
pub mod loader;
pub mod schema;

pub use error::ConfigError;
pub use loader::SettingsLoader;
pub use schema::{LedgerConfigEntry, LedgerSettings, Settings};
