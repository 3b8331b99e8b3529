//! oxo CLI - Tic-tac-toe against tiered computer opponents
//!
//! This CLI provides a unified interface for:
//! - Playing interactive games in the terminal
//! - Running scripted matchups against the engine
//! - Inspecting positions and each tier's chosen move

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "oxo")]
#[command(version, about = "Tic-tac-toe with tiered computer opponents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game against the engine
    Play(oxo::cli::commands::play::PlayArgs),

    /// Run a scripted matchup and tally the outcomes
    Simulate(oxo::cli::commands::simulate::SimulateArgs),

    /// Inspect a position and each tier's chosen move
    Analyze(oxo::cli::commands::analyze::AnalyzeArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => oxo::cli::commands::play::execute(args),
        Commands::Simulate(args) => oxo::cli::commands::simulate::execute(args),
        Commands::Analyze(args) => oxo::cli::commands::analyze::execute(args),
    }
}
