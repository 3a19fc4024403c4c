use thiserror::Error;

use crate::state::Action;
use crate::types::Player;

/// Board invariant violations reported by `BoardState::validate`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("slot {index} holds out-of-range position {value} (expected 0..=55)")]
    OutOfRangeValue { index: usize, value: i64 },
    #[error("slots {first} and {second} overlap on position {position}")]
    Overlap {
        first: usize,
        second: usize,
        position: u8,
    },
    #[error("{player} ball is not held by one of its blocks")]
    BallNotHeld { player: Player },
    #[error("expected 12 positions, got {len}")]
    WrongLength { len: usize },
}

/// Why a proposed action is not in the legal set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectReason {
    #[error("relative index {0} does not name a piece (expected 0..=5)")]
    NoSuchPiece(u8),
    #[error("target {0} is off the board")]
    TargetOutOfRange(u8),
    #[error("block is holding the ball and cannot move")]
    HolderPinned,
    #[error("target is not a knight jump away")]
    NotAKnightJump,
    #[error("target square is occupied by slot {0}")]
    Occupied(usize),
    #[error("no teammate stands on the target square")]
    NoTeammateAtTarget,
    #[error("every passing lane to the target is blocked")]
    PassBlocked,
    #[error("action is not in the legal set")]
    NotLegal,
    #[error("board is invalid: {0}")]
    InvalidBoard(BoardError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RulesError {
    #[error("slot {index} is a ball, not a block")]
    InvalidPieceKind { index: usize },
    #[error("slot {index} does not exist")]
    NoSuchPiece { index: usize },
    #[error("{player} cannot play piece {} to {}: {reason}", .action.relative_index, .action.target)]
    InvalidAction {
        player: Player,
        action: Action,
        reason: RejectReason,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("search exhausted after {explored} states without reaching a goal")]
    SearchExhausted { explored: usize },
    #[error("search stopped at the state cap ({cap}) without reaching a goal")]
    StateCapReached { cap: usize },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}
