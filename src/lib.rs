#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // may be revisited

pub mod types;
pub mod error;
pub mod board;
pub mod state;
pub mod rules;
pub mod config;
pub mod rng;

pub mod engine {
    pub mod apply;
    pub mod player;
    pub mod score;
    pub mod simulator;
}

pub mod solver;

// Re-exports: stable minimal API surface for external callers
pub use crate::board::BoardState;
pub use crate::config::{load_config_from_json, EngineConfig};
pub use crate::engine::apply::apply_action;
pub use crate::engine::player::{AdversarialPlayer, Decision, Policy, RandomPlayer};
pub use crate::engine::score::heuristic;
pub use crate::engine::simulator::{GameOutcome, GameSimulator, GameStatus};
pub use crate::error::{BoardError, ConfigError, RejectReason, RulesError, SearchError};
pub use crate::rng::rng_for_state;
pub use crate::rules::{ball_moves, block_moves, check_action, legal_actions};
pub use crate::solver::{
    choose_action, AdversarialSearch, GameStateProblem, PathLimits, PathSearch, SearchLimits,
    SearchProblem,
};
pub use crate::state::{Action, SearchState};
pub use crate::types::{decode, encode, Player};
