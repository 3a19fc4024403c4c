use std::io::Read;
use std::path::PathBuf;

use clap::Parser;
use serde::{Deserialize, Serialize};
use knightball::{
    load_config_from_json, Action, AdversarialSearch, BoardState, EngineConfig, GameStateProblem,
    Player, SearchProblem, SearchState,
};

#[derive(Debug, Parser)]
#[command(name = "choose", about = "Pick a move for a board read as JSON from stdin")]
struct Args {
    /// Engine config JSON (search / path limits); flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Ply budget, counting the move being chosen
    #[arg(long)]
    plies: Option<u8>,

    /// Soft cap on searched nodes
    #[arg(long)]
    max_nodes: Option<u64>,

    /// Soft wall-clock cap in milliseconds
    #[arg(long)]
    time_ms: Option<u64>,

    /// Evaluate root moves in parallel
    #[arg(long, default_value_t = false)]
    parallel: bool,
}

#[derive(Debug, Deserialize)]
struct EvalInput {
    positions: Vec<i64>,
    to_move: u8,
}

#[derive(Debug, Serialize)]
struct EvalOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    best_action: Option<Action>,
    value: Option<f64>,
    nodes: u64,
    depth: u8,
    terminal: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    winner: Option<Player>,
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
    if args.max_nodes.is_some() {
        config.search.max_nodes = args.max_nodes;
    }
    if args.time_ms.is_some() {
        config.search.time_ms = args.time_ms;
    }
    config.search.parallel |= args.parallel;

    let mut raw = String::new();
    std::io::stdin().read_to_string(&mut raw)?;
    let input: EvalInput = serde_json::from_str(&raw).map_err(|e| format!("invalid json: {e}"))?;

    let board = BoardState::from_slice(&input.positions).map_err(|e| format!("invalid board: {e}"))?;
    board
        .validate()
        .map_err(|e| format!("invalid board: {e}"))?;
    let player = Player::from_idx(input.to_move)
        .ok_or_else(|| format!("invalid to_move {} (expected 0 or 1)", input.to_move))?;

    let problem = GameStateProblem::from_state(SearchState::new(&board, player));
    let result = AdversarialSearch::new(config.search).search(&problem, problem.initial_state());
    eprintln!(
        "[choose] {player} depth={} nodes={} value={:?}",
        result.depth, result.nodes, result.value
    );

    let out = EvalOutput {
        best_action: result.best_action,
        value: result.value,
        nodes: result.nodes,
        depth: result.depth,
        terminal: board.is_terminal(),
        winner: board.winner(),
    };
    println!("{}", serde_json::to_string(&out)?);
    Ok(())
}
