//! symkind command-line entry point

use anyhow::Result;
use clap::Parser;

use symkind_cli::commands::Commands;

/// Decide what version-control symbols become during a history conversion
#[derive(Debug, Parser)]
#[command(name = "symkind", version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
