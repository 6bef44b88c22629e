//! # vlp CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// VeilPool CLI — privacy-preserving liquidity protocol toolchain.
///
/// Derives deposit commitments and withdrawal nullifiers, and runs a
/// scripted protocol demo against the in-memory ledger harness.
#[derive(Parser, Debug)]
#[command(name = "vlp", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Derive a deposit commitment and withdrawal nullifier.
    Commitment(vlp_cli::commitment::CommitmentArgs),
    /// Run the scripted end-to-end protocol demo.
    Demo(vlp_cli::demo::DemoArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Commitment(args) => vlp_cli::commitment::run(&args),
        Commands::Demo(args) => vlp_cli::demo::run(&args),
    }
}
