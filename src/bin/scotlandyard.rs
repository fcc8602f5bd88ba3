//! Scotland Yard CLI - exact solving and playback for the pursuit-evasion game
//!
//! This CLI provides a unified interface for:
//! - Solving a starting configuration exhaustively and exporting the policy
//! - Playing games back with random, greedy or policy-driven strategies

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "scotlandyard")]
#[command(version, about = "Pursuit-evasion engine and exact solver", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Exhaustively solve a starting configuration
    Solve(scotlandyard::cli::commands::solve::SolveArgs),

    /// Play games with configurable strategies
    Play(scotlandyard::cli::commands::play::PlayArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve(args) => scotlandyard::cli::commands::solve::execute(args),
        Commands::Play(args) => scotlandyard::cli::commands::play::execute(args),
    }
}
