//! Solve command - exhaustively solve a starting configuration

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::output::{create_spinner, format_number, print_kv, print_section},
    game::{Board, GameConfig},
    persist::PolicyFile,
    solver::solve,
    types::NodeId,
};

#[derive(Parser, Debug)]
#[command(about = "Exhaustively solve a starting configuration")]
pub struct SolveArgs {
    /// Board to play on (top-right-20 or top-right-35)
    #[arg(long, default_value = crate::game::board::TOP_RIGHT_35)]
    pub board: String,

    /// Starting node for Mr. X
    #[arg(long, default_value_t = 1)]
    pub mrx: u16,

    /// Starting nodes for the detectives
    #[arg(long, num_args = 1.., default_values_t = [5, 10])]
    pub detectives: Vec<u16>,

    /// Full rounds Mr. X must survive
    #[arg(long, default_value_t = 15)]
    pub max_rounds: u32,

    /// Write the solved policy to a JSON file
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

pub fn execute(args: SolveArgs) -> Result<()> {
    let board = Board::by_name(&args.board)?;
    let config = GameConfig::new(
        NodeId::new(args.mrx),
        args.detectives.iter().copied().map(NodeId::new).collect(),
        args.max_rounds,
    );

    let spinner = create_spinner("Solving game tree...");
    let result = solve(&board, &config)?;
    spinner.finish_and_clear();

    print_section("Exhaustive solve");
    print_kv("Board", &board.to_string());
    print_kv("Mr. X start", &config.mrx_start.to_string());
    print_kv(
        "Detective starts",
        &config
            .detective_starts
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join(", "),
    );
    print_kv("Max rounds", &config.max_rounds.to_string());
    print_kv(
        "Forced escape",
        if result.forced_escape { "yes" } else { "no" },
    );
    print_kv("States evaluated", &format_number(result.states_evaluated));
    print_kv("Policy size", &format_number(result.policy.len()));

    if result.forced_escape {
        println!("\nMr. X can guarantee escape against every detective line.");
    } else {
        println!("\nThe detectives can force a capture against any Mr. X play.");
    }

    if let Some(path) = &args.output {
        let file = PolicyFile::new(&board, config, &result);
        file.save_to_file(path)?;
        println!("Policy written to: {}", path.display());
    }

    Ok(())
}
