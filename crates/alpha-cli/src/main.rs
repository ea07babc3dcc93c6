//! alpha-cli
//!
//! Command-line client for an Alpha node. Creates genesis documents, checks
//! validators in, and downloads the finished genesis file via JSON-RPC.
//!
//! Usage:
//!   alpha-cli list          [--rpc <url>]
//!   alpha-cli create        --chain-id <id> [--pub-key <json> --power <n> --name <s>] [--app-hash <hex>] [--app-state <json>]
//!   alpha-cli show          --chain-id <id>
//!   alpha-cli add-validator --chain-id <id> --pub-key <json> --power <n> --name <s>
//!   alpha-cli view          --chain-id <id>
//!   alpha-cli download      --chain-id <id> [--out <path>]

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args as ClapArgs, Parser, Subcommand};
use tracing::info;

use alpha_core::GenesisDoc;
use alpha_rpc::{RpcChainSummary, RpcCreateChain, RpcValidatorFields};

mod rpc_client;
use rpc_client::NodeRpcClient;

// ── CLI definition ────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "alpha-cli",
    version,
    about = "Alpha client — build a shared genesis file"
)]
struct Args {
    /// Node RPC endpoint.
    #[arg(long, global = true, default_value = "http://127.0.0.1:8080")]
    rpc: String,

    #[command(subcommand)]
    command: Command,
}

/// Validator fields. Leave all three out to create a chain without a validator.
#[derive(ClapArgs, Debug)]
struct ValidatorArgs {
    /// Validator public key JSON (output of the node's `show_validator`).
    #[arg(long, default_value = "")]
    pub_key: String,
    /// Voting power.
    #[arg(long, default_value = "")]
    power: String,
    /// Display name.
    #[arg(long, default_value = "")]
    name: String,
}

impl From<ValidatorArgs> for RpcValidatorFields {
    fn from(a: ValidatorArgs) -> Self {
        RpcValidatorFields {
            pub_key: a.pub_key,
            power: a.power,
            name: a.name,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the chains known to the node.
    List,

    /// Create a new genesis document.
    Create {
        #[arg(long)]
        chain_id: String,
        #[command(flatten)]
        validator: ValidatorArgs,
        /// App hash. Stored as the bytes of the given text.
        #[arg(long, default_value = "")]
        app_hash: String,
        /// App state (raw JSON).
        #[arg(long, default_value = "")]
        app_state: String,
    },

    /// Show how many validators have checked in.
    Show {
        #[arg(long)]
        chain_id: String,
    },

    /// Add your validator to an existing genesis document.
    AddValidator {
        #[arg(long)]
        chain_id: String,
        #[command(flatten)]
        validator: ValidatorArgs,
    },

    /// Print the genesis JSON.
    View {
        #[arg(long)]
        chain_id: String,
    },

    /// Save the genesis JSON to a file.
    Download {
        #[arg(long)]
        chain_id: String,
        /// Output path. Defaults to the file name suggested by the node.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let client = NodeRpcClient::new(&args.rpc);

    match args.command {
        Command::List => {
            let chains = client.list_chains().await?;
            if chains.is_empty() {
                println!("No genesis files :(");
            }
            for chain_id in chains {
                println!("{chain_id}");
            }
        }

        Command::Create {
            chain_id,
            validator,
            app_hash,
            app_state,
        } => {
            let fields = RpcValidatorFields::from(validator);
            let request = RpcCreateChain {
                chain_id,
                validator_pub_key: fields.pub_key,
                validator_power: fields.power,
                validator_name: fields.name,
                app_hash,
                app_state,
            };
            let summary = client.create_chain(&request).await?;
            info!(chain_id = %summary.chain_id, "genesis created");
            print_summary(&summary);
            println!(
                "Give the chain ID to other validators: alpha-cli add-validator --chain-id {}",
                summary.chain_id
            );
        }

        Command::Show { chain_id } => {
            let summary = client.get_chain(&chain_id).await?;
            print_summary(&summary);
        }

        Command::AddValidator {
            chain_id,
            validator,
        } => {
            let summary = client
                .add_validator(&chain_id, &RpcValidatorFields::from(validator))
                .await?;
            print_summary(&summary);
        }

        Command::View { chain_id } => {
            println!("{}", client.view_genesis(&chain_id).await?);
        }

        Command::Download { chain_id, out } => {
            let file = client.download_genesis(&chain_id).await?;
            // Refuse to save anything a node could not load.
            GenesisDoc::from_json(file.content.as_bytes())
                .context("node returned an unreadable genesis document")?;
            let path = out.unwrap_or_else(|| PathBuf::from(&file.file_name));
            std::fs::write(&path, file.content.as_bytes())
                .with_context(|| format!("writing genesis to {}", path.display()))?;
            println!("Saved genesis for {} to {}", file.chain_id, path.display());
        }
    }

    Ok(())
}

fn print_summary(summary: &RpcChainSummary) {
    println!("Chain:        {}", summary.chain_id);
    println!("Genesis time: {}", summary.genesis_time);
    println!(
        "{} validators have checked in so far (total power {})",
        summary.validator_count, summary.total_power
    );
    for v in &summary.validators {
        println!("  {:>12}  {}  {}", v.power, v.name, v.pub_key);
    }
}
