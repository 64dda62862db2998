use clap::{Parser, Subcommand};
use solana_sdk::pubkey::Pubkey;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod commands;
mod config;
mod error;

use error::CliResult;

#[derive(Parser)]
#[command(name = "anchor-vault")]
#[command(about = "Anchor Vault CLI - per-owner SOL vaults on Solana")]
#[command(version)]
struct Cli {
    /// Log transaction output and program logs
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print an owner's VaultState and holding addresses with their bumps
    Derive {
        /// Vault owner
        #[arg(short, long)]
        owner: Pubkey,

        /// Vault program id (defaults to the built-in id)
        #[arg(short, long)]
        program_id: Option<Pubkey>,
    },

    /// Run a YAML scenario against an in-process ledger
    Simulate {
        /// Scenario configuration file
        #[arg(short, long)]
        config: PathBuf,
    },
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();

    FmtSubscriber::builder()
        .with_max_level(if cli.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .init();

    match cli.command {
        Commands::Derive { owner, program_id } => commands::derive::execute(owner, program_id),

        Commands::Simulate { config } => commands::simulate::execute(config),
    }
}
