//! alpha-node — serves the genesis registry over JSON-RPC.
//!
//! Startup sequence:
//!   1. Load the registry config (file, then command-line overrides)
//!   2. Create the empty in-memory registry
//!   3. Start the JSON-RPC 2.0 server
//!   4. Run until Ctrl-C, then stop the server
//!
//! Nothing is persisted: every genesis document is lost when the process exits.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use alpha_genesis::{DuplicatePubKeyPolicy, GenesisRegistry, RegistryConfig};
use alpha_rpc::{RpcServer, RpcServerState};

#[derive(Parser, Debug)]
#[command(
    name = "alpha-node",
    version,
    about = "Alpha node — collect validators into a shared genesis file"
)]
struct Args {
    /// JSON-RPC listen address.
    #[arg(long, default_value = "127.0.0.1:8080")]
    rpc_addr: SocketAddr,

    /// Path to a registry config JSON file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Refuse validators whose public key is already in the document.
    #[arg(long, default_value_t = false)]
    reject_duplicate_pub_keys: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,alpha=debug")),
        )
        .init();

    let args = Args::parse();
    info!("Alpha node starting");

    // ── Registry ──────────────────────────────────────────────────────────────
    let mut config = load_config(args.config.as_deref())?;
    if args.reject_duplicate_pub_keys {
        config.duplicate_pub_keys = DuplicatePubKeyPolicy::Reject;
    }
    let registry = Arc::new(GenesisRegistry::new(config));
    info!(
        duplicate_pub_keys = ?registry.config().duplicate_pub_keys,
        "registry configured"
    );

    // ── RPC server ────────────────────────────────────────────────────────────
    let rpc_state = Arc::new(RpcServerState {
        registry: Arc::clone(&registry),
    });
    let (addr, rpc_handle) = RpcServer::new(rpc_state)
        .start(args.rpc_addr)
        .await
        .context("starting RPC server")?;

    info!(%addr, "node ready");
    tokio::signal::ctrl_c()
        .await
        .context("waiting for shutdown signal")?;

    info!(chains = registry.len(), "shutting down, discarding genesis documents");
    rpc_handle.stop().context("stopping RPC server")?;
    rpc_handle.stopped().await;
    Ok(())
}

/// Load the registry config from a JSON file, or use defaults if no path is given.
fn load_config(path: Option<&Path>) -> anyhow::Result<RegistryConfig> {
    let Some(p) = path else {
        return Ok(RegistryConfig::default());
    };
    let json = std::fs::read_to_string(p)
        .with_context(|| format!("reading registry config from {}", p.display()))?;
    serde_json::from_str(&json).context("parsing registry config JSON")
}
