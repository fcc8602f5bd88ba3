//! Play command - run games with configurable strategies
//!
//! When a policy file is supplied, the starting configuration is read from
//! its `config` block; any explicitly supplied configuration flag must
//! match that block exactly or the command fails before any playback.

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;

use crate::{
    cli::output::{create_games_progress, print_kv, print_section},
    game::{Board, GameConfig, GameStatus, board},
    persist::PolicyFile,
    playback::MatchRunner,
    solver::Policy,
    strategy::{GreedyStrategy, PolicyStrategy, RandomStrategy, Strategy},
    types::NodeId,
};

#[derive(Parser, Debug)]
#[command(about = "Play games with configurable strategies")]
pub struct PlayArgs {
    /// Board to play on (top-right-20 or top-right-35)
    #[arg(long)]
    pub board: Option<String>,

    /// Starting node for Mr. X
    #[arg(long)]
    pub mrx: Option<u16>,

    /// Starting nodes for the detectives
    #[arg(long, num_args = 1..)]
    pub detectives: Option<Vec<u16>>,

    /// Full rounds Mr. X must survive
    #[arg(long)]
    pub max_rounds: Option<u32>,

    /// Solved policy file; fixes the configuration and drives Mr. X
    #[arg(long)]
    pub policy: Option<PathBuf>,

    /// Strategy for Mr. X (random, greedy, policy)
    #[arg(long)]
    pub mrx_strategy: Option<String>,

    /// Strategy for the detectives (random, greedy)
    #[arg(long, default_value = "random")]
    pub detective_strategy: String,

    /// Number of games to play
    #[arg(long, short = 'g', default_value_t = 1)]
    pub games: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let (board, config, policy) = resolve_setup(&args)?;

    let mrx_strategy = args
        .mrx_strategy
        .clone()
        .unwrap_or_else(|| if policy.is_some() { "policy" } else { "random" }.to_string());

    print_section("Scotland Yard");
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
    print_kv("Mr. X strategy", &mrx_strategy);
    print_kv("Detective strategy", &args.detective_strategy);
    if let Some(seed) = args.seed {
        print_kv("Seed", &seed.to_string());
    }

    if args.games == 1 {
        let (mrx, detectives) = build_strategies(&args, &config, &mrx_strategy, policy.as_ref(), 0)?;
        play_verbose(&board, &config, mrx, detectives)
    } else {
        play_batch(&args, &board, &config, &mrx_strategy, policy.as_ref())
    }
}

/// Resolve board, configuration and policy, honoring the policy-file
/// startup contract.
fn resolve_setup(args: &PlayArgs) -> Result<(Board, GameConfig, Option<Policy>)> {
    if let Some(path) = &args.policy {
        let file = PolicyFile::load_from_file(path)?;
        let board = Board::by_name(&file.board)?;
        file.validate(&board)?;

        let detective_flags: Option<Vec<NodeId>> = args
            .detectives
            .as_ref()
            .map(|d| d.iter().copied().map(NodeId::new).collect());
        file.ensure_config_matches(
            args.board.as_deref(),
            args.mrx.map(NodeId::new),
            detective_flags.as_deref(),
            args.max_rounds,
        )?;

        Ok((board, file.config.clone(), Some(file.to_policy())))
    } else {
        let board = Board::by_name(args.board.as_deref().unwrap_or(board::TOP_RIGHT_35))?;
        let defaults = GameConfig::default();
        let config = GameConfig::new(
            args.mrx.map(NodeId::new).unwrap_or(defaults.mrx_start),
            args.detectives
                .as_ref()
                .map(|d| d.iter().copied().map(NodeId::new).collect())
                .unwrap_or(defaults.detective_starts),
            args.max_rounds.unwrap_or(defaults.max_rounds),
        );
        config.validate(&board)?;
        Ok((board, config, None))
    }
}

/// Build fresh strategy objects for one game.
///
/// Mr. X plays with the base seed and detective `i` with `base + i + 1`,
/// offset per game so batch runs stay reproducible.
fn build_strategies(
    args: &PlayArgs,
    config: &GameConfig,
    mrx_strategy: &str,
    policy: Option<&Policy>,
    game_index: u64,
) -> Result<(Box<dyn Strategy>, Vec<Box<dyn Strategy>>)> {
    let base = args
        .seed
        .map(|s| s.wrapping_add(game_index.wrapping_mul(1000)));

    let mrx: Box<dyn Strategy> = match mrx_strategy {
        "random" => Box::new(RandomStrategy::new(base)),
        "greedy" => Box::new(GreedyStrategy::new()),
        "policy" => {
            let Some(policy) = policy else {
                bail!("--mrx-strategy policy requires --policy");
            };
            Box::new(PolicyStrategy::new(policy.clone()))
        }
        other => bail!("Unknown Mr. X strategy: '{other}'. Supported: random, greedy, policy"),
    };

    let detectives: Vec<Box<dyn Strategy>> = (0..config.detective_starts.len())
        .map(|i| {
            let strategy: Result<Box<dyn Strategy>> = match args.detective_strategy.as_str() {
                "random" => Ok(Box::new(RandomStrategy::new(
                    base.map(|s| s.wrapping_add(i as u64 + 1)),
                ))),
                "greedy" => Ok(Box::new(GreedyStrategy::new())),
                other => {
                    bail!("Unknown detective strategy: '{other}'. Supported: random, greedy")
                }
            };
            strategy
        })
        .collect::<Result<_>>()?;

    Ok((mrx, detectives))
}

/// Play a single game, logging every move.
fn play_verbose(
    board: &Board,
    config: &GameConfig,
    mrx: Box<dyn Strategy>,
    detectives: Vec<Box<dyn Strategy>>,
) -> Result<()> {
    let mut runner = MatchRunner::new(board, config, mrx, detectives)?;

    println!();
    while let Some(record) = runner.step()? {
        if record.forced_pass {
            println!("  {}: {} (stuck)", record.turn, record.from);
        } else {
            println!("  {}: {} → {}", record.turn, record.from, record.to);
        }
    }

    println!("\n{}  (round {})", runner.status(), runner.state().round);
    Ok(())
}

/// Play a batch of games and report aggregate outcomes.
fn play_batch(
    args: &PlayArgs,
    board: &Board,
    config: &GameConfig,
    mrx_strategy: &str,
    policy: Option<&Policy>,
) -> Result<()> {
    let pb = create_games_progress(args.games as u64);

    let mut escapes = 0usize;
    let mut captures = 0usize;
    let mut total_rounds = 0u64;

    for game_index in 0..args.games {
        let (mrx, detectives) =
            build_strategies(args, config, mrx_strategy, policy, game_index as u64)?;
        let mut runner = MatchRunner::new(board, config, mrx, detectives)?;
        match runner.play_game()? {
            GameStatus::Survived => escapes += 1,
            GameStatus::Captured => captures += 1,
            GameStatus::InProgress => unreachable!("play_game returns a terminal status"),
        }
        total_rounds += u64::from(runner.state().round);
        pb.inc(1);
    }

    pb.finish_and_clear();

    let percent = |n: usize| 100.0 * n as f64 / args.games as f64;
    print_section("Results");
    print_kv("Games", &args.games.to_string());
    print_kv(
        "Mr. X escapes",
        &format!("{} ({:.1}%)", escapes, percent(escapes)),
    );
    print_kv(
        "Captures",
        &format!("{} ({:.1}%)", captures, percent(captures)),
    );
    print_kv(
        "Average rounds",
        &format!("{:.1}", total_rounds as f64 / args.games as f64),
    );

    Ok(())
}
