//! riptide CLI
//!
//! Derives scrypt keys from the command line. The KDF core does all the
//! work; this binary only parses cost parameters and prints hex.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{run_derive, DeriveArgs};

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Parser)]
#[command(name = "riptide")]
#[command(about = "Memory-hard scrypt key derivation (RFC 7914)", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive a key from a password and salt
    Derive(DeriveArgs),
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Derive(args) => run_derive(&args),
    }
}
