//! noughts CLI - Tic-tac-toe against a heuristic computer opponent

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "noughts")]
#[command(version, about = "Tic-tac-toe against a heuristic computer opponent", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game in the terminal
    Play(noughts::cli::commands::play::PlayArgs),

    /// Simulate batches of games between policies
    Simulate(noughts::cli::commands::simulate::SimulateArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => noughts::cli::commands::play::execute(args),
        Commands::Simulate(args) => noughts::cli::commands::simulate::execute(args),
    }
}
