//! Ledgermesh - Multi-ledger wiring check.
//!
//! Loads a ledger settings file, wires the multi-ledger manager for the
//! requested profile kind, and prints the resulting topology. Used to
//! validate a deployment's ledger configuration before an agent boots on
//! it.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, ValueEnum};
use tracing::error;
use tracing_subscriber::EnvFilter;

use ledgermesh_config::{Settings, SettingsLoader};
use ledgermesh_core::{
    InMemoryProfile, LedgerPoolConfig, MemoryCache, MultiLedgerManagerProvider, SdkLedger,
    SdkLedgerPool, SdkProfile, SharedServices, VdrLedger, VdrLedgerPool, VdrProfile,
};
use ledgermesh_protocols::{MultiLedgerManager, Profile};

/// Ledgermesh CLI.
#[derive(Parser)]
#[command(name = "ledgermesh")]
#[command(about = "Multi-ledger wiring check for verifiable credential agents")]
#[command(version)]
struct Cli {
    /// Settings file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Profile kind to wire the manager for
    #[arg(short, long, value_enum, default_value = "vdr")]
    profile: ProfileArg,

    /// Pool name for the startup ledger when genesis transactions are set
    #[arg(long, default_value = "default")]
    pool_name: String,
}

#[derive(Clone, Copy, ValueEnum)]
enum ProfileArg {
    Sdk,
    Vdr,
    InMemory,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let path = cli
        .config
        .unwrap_or_else(SettingsLoader::default_settings_path);
    let settings = SettingsLoader::load(&path)?;

    let profile = build_profile(cli.profile, &cli.pool_name, &settings);
    let injector = SharedServices::with_cache(Arc::new(MemoryCache::new()));
    let provider = MultiLedgerManagerProvider::new(profile);
    let manager = provider.provide(&settings, &injector)?;

    print_topology(&*manager);
    Ok(())
}

/// Construct the requested profile, binding a startup ledger of the
/// matching family when genesis transactions are configured.
fn build_profile(kind: ProfileArg, pool_name: &str, settings: &Settings) -> Arc<dyn Profile> {
    let startup_config = settings
        .ledger
        .genesis_transactions
        .as_ref()
        .map(|genesis| LedgerPoolConfig {
            genesis_transactions: Some(genesis.clone()),
            ..LedgerPoolConfig::default()
        });

    match kind {
        ProfileArg::Sdk => {
            let profile = Arc::new(SdkProfile::new("cli"));
            if let Some(config) = startup_config {
                let root: Arc<dyn Profile> = profile.clone();
                profile.bind_base_ledger(Arc::new(SdkLedger::new(
                    SdkLedgerPool::new(pool_name, config),
                    root,
                )));
            }
            profile
        }
        ProfileArg::Vdr => {
            let profile = Arc::new(VdrProfile::new("cli"));
            if let Some(config) = startup_config {
                let root: Arc<dyn Profile> = profile.clone();
                profile.bind_base_ledger(Arc::new(VdrLedger::new(
                    VdrLedgerPool::new(pool_name, config),
                    root,
                )));
            }
            profile
        }
        ProfileArg::InMemory => Arc::new(InMemoryProfile::new("cli")),
    }
}

fn print_topology(manager: &dyn MultiLedgerManager) {
    println!("production ledgers:");
    for (id, ledger) in manager.production_ledgers().iter() {
        println!(
            "  {id}  (pool: {}, backend: {}{})",
            ledger.pool_name(),
            ledger.backend(),
            if ledger.read_only() { ", read-only" } else { "" }
        );
    }

    println!("non-production ledgers:");
    for (id, ledger) in manager.non_production_ledgers().iter() {
        println!(
            "  {id}  (pool: {}, backend: {}{})",
            ledger.pool_name(),
            ledger.backend(),
            if ledger.read_only() { ", read-only" } else { "" }
        );
    }

    match manager.write_ledger() {
        Some((id, _)) => println!("write ledger: {id}"),
        None => println!("write ledger: none"),
    }
}
