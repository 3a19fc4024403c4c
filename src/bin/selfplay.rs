use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use knightball::{
    load_config_from_json, AdversarialPlayer, BoardState, EngineConfig, GameSimulator, Policy,
    RandomPlayer, SearchLimits,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyOpt {
    Adversarial,
    Random,
}

#[derive(Debug, Parser)]
#[command(name = "selfplay", about = "Play one game between two policies")]
struct Args {
    /// Starting board as 12 comma-separated positions (defaults to the opening)
    #[arg(long)]
    state: Option<String>,

    #[arg(long, value_enum, default_value_t = PolicyOpt::Adversarial)]
    white: PolicyOpt,

    #[arg(long, value_enum, default_value_t = PolicyOpt::Adversarial)]
    black: PolicyOpt,

    /// Engine config JSON; --plies overrides its ply budget
    #[arg(long)]
    config: Option<PathBuf>,

    /// Ply budget for adversarial players
    #[arg(long)]
    plies: Option<u8>,

    /// Seed for random players (deterministic)
    #[arg(long, default_value_t = 0x00C0FFEEu64)]
    seed: u64,

    /// Stop without a winner after this many rounds
    #[arg(long, default_value_t = 200)]
    max_rounds: u32,
}

fn parse_state(s: &str) -> Result<BoardState, String> {
    let raw: Vec<i64> = s
        .split(',')
        .map(|x| x.trim().parse::<i64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("Invalid position in '{s}': {e}"))?;
    BoardState::from_slice(&raw).map_err(|e| e.to_string())
}

fn make_policy(opt: PolicyOpt, limits: SearchLimits, seed: u64, game_id: u64) -> Box<dyn Policy> {
    match opt {
        PolicyOpt::Adversarial => Box::new(AdversarialPlayer::new(limits)),
        PolicyOpt::Random => Box::new(RandomPlayer::new(seed, game_id)),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config_from_json(path).map_err(|e| format!("config error: {e}"))?,
        None => EngineConfig::default(),
    };
    if let Some(plies) = args.plies {
        config.search.max_depth = plies;
    }

    let board = match &args.state {
        Some(s) => parse_state(s).map_err(|e| format!("State parse error: {e}"))?,
        None => BoardState::default(),
    };

    let white = make_policy(args.white, config.search, args.seed, 0);
    let black = make_policy(args.black, config.search, args.seed, 1);
    let mut sim = GameSimulator::new(white, black)
        .with_board(board)
        .map_err(|e| format!("invalid starting board: {e}"))?
        .with_max_rounds(args.max_rounds);

    println!("{}", sim.board());
    let outcome = sim.run();
    for (round, (player, action)) in outcome.moves.iter().enumerate() {
        println!(
            "Round: {round} Player: {player} Action: ({}, {})",
            action.relative_index, action.target
        );
    }
    println!("{}", outcome.final_board);
    match outcome.winner {
        Some(p) => println!(
            "[selfplay] rounds={} winner={p} status={:?}",
            outcome.rounds, outcome.status
        ),
        None => println!(
            "[selfplay] rounds={} no winner status={:?}",
            outcome.rounds, outcome.status
        ),
    }
    Ok(())
}
